use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rowbind::{args, Backend, Mapper};
use tests::{models::Post, setup, LoggingBackend};

type TestMapper = Mapper<LoggingBackend<rowbind::Sqlite>>;

fn seeded() -> TestMapper {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    for (i, title) in ["alpha", "beta", "gamma", "delta"].into_iter().enumerate() {
        let mut post = Post::new(title, start + Duration::days(i as i64));
        post.published = i % 2 == 0;
        mapper.insert(&mut post).unwrap();
    }

    mapper
}

fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|post| post.title.as_str()).collect()
}

#[test]
fn find_all_in_insertion_order() {
    let mapper = seeded();

    let mut posts = vec![];
    mapper.select().find_all::<Post>(&mut posts).unwrap();

    assert_eq!(titles(&posts), ["alpha", "beta", "gamma", "delta"]);
    assert_eq!(posts[3].id, 4);
}

#[test]
fn find_all_honors_filter_order_and_limit() {
    let mapper = seeded();

    let mut posts = vec![];
    mapper
        .select()
        .filter("published = ?", args![true])
        .order("created_at DESC")
        .find_all::<Post>(&mut posts)
        .unwrap();
    assert_eq!(titles(&posts), ["gamma", "alpha"]);

    mapper
        .select()
        .order("title")
        .limit("2")
        .find_all::<Post>(&mut posts)
        .unwrap();
    assert_eq!(titles(&posts), ["alpha", "beta"]);

    assert_eq!(
        mapper.backend().log().sql().last().unwrap(),
        "SELECT id, title, published, rating, created_at, body FROM posts ORDER BY title LIMIT 2;"
    );
}

#[test]
fn find_takes_first_matching_row() {
    let mapper = seeded();

    let mut post = Post::default();
    mapper
        .select()
        .filter("title LIKE ?", args!["%a"])
        .order("id DESC")
        .find(&mut post)
        .unwrap();

    assert_eq!(post.title, "delta");
}

#[test]
fn find_without_match_is_record_not_found() {
    let mapper = seeded();

    let mut post = Post::default();
    let err = mapper
        .select()
        .filter("title = ?", args!["missing"])
        .find(&mut post)
        .unwrap_err();

    assert!(err.is_record_not_found());
    assert_eq!(post, Post::default());
}

#[test]
fn find_by_unknown_primary_key() {
    let mapper = seeded();

    let mut post = Post::with_id(99);
    let err = mapper.find_by_primary_key(&mut post).unwrap_err();

    assert!(err.is_record_not_found());
}

#[test]
fn count_with_and_without_filter() {
    let mapper = seeded();

    assert_eq!(mapper.select().count::<Post>().unwrap(), 4);
    assert_eq!(
        mapper
            .select()
            .filter("published = ? AND title <> ?", args![false, "beta"])
            .count::<Post>()
            .unwrap(),
        1
    );
}

#[test]
fn filter_placeholders_inside_literals_are_not_arguments() {
    let mapper = seeded();

    let count = mapper
        .select()
        .filter("title <> 'what?' AND id > ?", args![2])
        .count::<Post>()
        .unwrap();

    assert_eq!(count, 2);
}

#[test]
fn failed_find_all_keeps_destination() {
    let mapper = seeded();

    let mut posts = vec![Post::new("original", Utc::now())];
    mapper.backend().fail_next_query_at_row(2);

    let err = mapper.select().find_all(&mut posts).unwrap_err();

    assert!(err.is_backend());
    assert_eq!(err.to_string(), "injected row failure");
    assert_eq!(titles(&posts), ["original"]);

    // The injected failure applies to one query only
    mapper.select().find_all(&mut posts).unwrap();
    assert_eq!(posts.len(), 4);
}

#[test]
fn find_all_reports_conversion_failure_with_row_and_column() {
    let mapper = seeded();

    mapper
        .backend()
        .inner()
        .execute(
            "UPDATE posts SET created_at = 'yesterday' WHERE id = 3;",
            &[],
        )
        .unwrap();

    let mut posts = vec![];
    let err = mapper.select().find_all::<Post>(&mut posts).unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "row 2 of posts: column created_at: cannot convert String to DateTime<Utc>"
    );
    assert!(posts.is_empty());
}
