use rowbind::{args, Backend};
use tests::{
    models::{Post, Visit},
    setup, OpKind,
};

#[test]
fn argument_count_mismatch_is_rejected_before_executing() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();
    let log = mapper.backend().log();
    let before = log.len();

    let err = mapper
        .update(&Post::default(), "id = ? AND title = ?", args![1])
        .unwrap_err();
    assert!(err.is_argument_count());
    assert_eq!(
        err.to_string(),
        "clause `id = ? AND title = ?` has 2 placeholders but 1 arguments were given"
    );

    let err = mapper
        .select()
        .filter("id = ?", args![])
        .find(&mut Post::default())
        .unwrap_err();
    assert!(err.is_argument_count());

    let err = mapper
        .delete(&Post::default(), "id = 1", args![1])
        .unwrap_err();
    assert!(err.is_argument_count());

    assert_eq!(log.len(), before);
}

#[test]
fn update_and_delete_require_a_where_clause() {
    let mapper = setup();
    mapper.create_table::<Post>(false).unwrap();

    let err = mapper.update(&Post::default(), "", args![]).unwrap_err();
    assert_eq!(err.to_string(), "update on posts requires a where clause");

    let err = mapper.delete(&Post::default(), " ", args![]).unwrap_err();
    assert_eq!(err.to_string(), "delete on posts requires a where clause");

    assert_eq!(mapper.backend().log().count(OpKind::Execute), 1);
}

#[test]
fn missing_table_is_a_backend_error() {
    let mapper = setup();

    let err = mapper.insert(&mut Post::default()).unwrap_err();

    assert!(err.is_backend());
    assert!(err.to_string().starts_with("insert into posts: no such table"));
}

#[test]
fn null_into_required_field_is_a_conversion_error() {
    let mapper = setup();
    mapper
        .backend()
        .inner()
        .execute("CREATE TABLE posts (id INTEGER PRIMARY KEY, title TEXT, published BOOLEAN, rating REAL, created_at DATETIME, body TEXT);", &[])
        .unwrap();
    mapper
        .backend()
        .inner()
        .execute("INSERT INTO posts (title) VALUES ('no body');", &[])
        .unwrap();

    let mut post = Post::with_id(1);
    let err = mapper.find_by_primary_key(&mut post).unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "column published: cannot convert Null to bool");
}

#[test]
#[should_panic(expected = "table `visits` has no primary key")]
fn find_by_primary_key_without_primary_key_panics() {
    let mapper = setup();
    let _ = mapper.find_by_primary_key(&mut Visit::default());
}

#[test]
#[should_panic(expected = "table `visits` has no primary key")]
fn update_by_primary_key_without_primary_key_panics() {
    let mapper = setup();
    let _ = mapper.update_by_primary_key(&Visit::default());
}
