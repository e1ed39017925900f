use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rowbind::args;
use tests::{models::Post, setup, OpKind};

fn post(title: &str) -> Post {
    Post::new(title, Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap())
}

#[test]
fn insert_then_find_by_primary_key_round_trips() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let mut written = post("hello");
    written.published = true;
    written.body = b"\x00\x01binary".to_vec();

    mapper.insert(&mut written).unwrap();
    assert_eq!(written.id, 1);

    let mut read = Post::with_id(written.id);
    mapper.find_by_primary_key(&mut read).unwrap();

    assert_eq!(read, written);
    assert_eq!(read.title, "hello");
    assert!(read.published);
    assert_eq!(read.rating, None);
    assert_eq!(
        read.created_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
    );
}

#[test]
fn insert_assigns_increasing_ids() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let ids: Vec<i64> = ["a", "b", "c"]
        .into_iter()
        .map(|title| {
            let mut post = post(title);
            mapper.insert(&mut post).unwrap();
            post.id
        })
        .collect();

    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn statements_sent_to_the_backend() {
    let mapper = setup();
    let mut log = mapper.backend().log();

    mapper.create_table::<Post>(true).unwrap();
    let mut post = post("hello");
    mapper.insert(&mut post).unwrap();

    assert_eq!(
        log.pop().sql,
        "CREATE TABLE IF NOT EXISTS posts (id INTEGER PRIMARY KEY, title TEXT NOT NULL, published BOOLEAN, rating REAL, created_at DATETIME, body TEXT);"
    );

    let insert = log.pop();
    assert_eq!(insert.kind, OpKind::Execute);
    assert_eq!(
        insert.sql,
        "INSERT INTO posts (title, published, rating, created_at, body) VALUES (?, ?, ?, ?, ?);"
    );
    assert_eq!(insert.args.len(), 5);
    assert!(log.is_empty());
}

#[test]
fn update_reflects_only_the_changed_field() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    for title in ["one", "two", "three", "four", "five"] {
        mapper.insert(&mut post(title)).unwrap();
    }

    let mut fifth = Post::with_id(5);
    mapper.find_by_primary_key(&mut fifth).unwrap();
    let before = fifth.clone();

    fifth.title = "changed".into();
    let updated = mapper.update(&fifth, "id = ?", args![5]).unwrap();
    assert_eq!(updated, 1);

    let mut after = Post::with_id(5);
    mapper.find_by_primary_key(&mut after).unwrap();

    assert_eq!(after.title, "changed");
    let mut expected = before;
    expected.title = "changed".into();
    assert_eq!(after, expected);

    // Other rows are untouched
    let mut fourth = Post::with_id(4);
    mapper.find_by_primary_key(&mut fourth).unwrap();
    assert_eq!(fourth.title, "four");
}

#[test]
fn update_by_primary_key() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let mut draft = post("draft");
    mapper.insert(&mut draft).unwrap();

    draft.published = true;
    draft.rating = Some(4.5);
    assert_eq!(mapper.update_by_primary_key(&draft).unwrap(), 1);

    let mut read = Post::with_id(draft.id);
    mapper.find_by_primary_key(&mut read).unwrap();
    assert_eq!(read, draft);
}

#[test]
fn find_all_on_empty_table_is_empty() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let mut posts = vec![post("stale")];
    mapper.select().find_all(&mut posts).unwrap();

    assert!(posts.is_empty());
}

#[test]
fn count_after_delete() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let mut posts = vec![post("a"), post("b"), post("c")];
    for post in &mut posts {
        mapper.insert(post).unwrap();
    }

    let deleted = mapper.delete_by_primary_key(&posts[1]).unwrap();
    assert_eq!(deleted, 1);

    assert_eq!(mapper.select().count::<Post>().unwrap(), 2);
    assert_eq!(
        mapper.backend().log().count(OpKind::Query),
        1,
        "count runs one query"
    );
}

#[test]
fn delete_with_clause() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    for title in ["keep", "drop", "drop"] {
        mapper.insert(&mut post(title)).unwrap();
    }

    let deleted = mapper
        .delete(&Post::default(), "title = ?", args!["drop"])
        .unwrap();
    assert_eq!(deleted, 2);

    let mut left: Vec<Post> = vec![];
    mapper.select().find_all(&mut left).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].title, "keep");
}

#[test]
fn create_table_if_not_exists_is_idempotent() {
    let mapper = setup();

    mapper.create_table::<Post>(true).unwrap();
    mapper.create_table::<Post>(true).unwrap();

    let err = mapper.create_table::<Post>(false).unwrap_err();
    assert!(err.is_backend());
    assert!(err.to_string().starts_with("create table posts: "));
}

#[test]
fn private_fields_are_not_persisted() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let mut written = post("private");
    written.set_views(42);
    mapper.insert(&mut written).unwrap();

    let mut read = Post::with_id(written.id);
    mapper.find_by_primary_key(&mut read).unwrap();

    assert_eq!(read.views(), 0);
}
