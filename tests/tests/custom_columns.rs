use pretty_assertions::assert_eq;
use rowbind::{args, Record};
use tests::{
    models::{Account, Visit},
    setup,
};
use uuid::Uuid;

#[test]
fn account_table_layout() {
    let spec = Account::table_spec();

    let columns: Vec<_> = spec
        .columns()
        .map(|column| (column.name(), column.sql_type(), column.constraint()))
        .collect();

    assert_eq!(
        columns,
        [
            ("account_id", "INTEGER", "PRIMARY KEY"),
            ("email_address", "TEXT", "NOT NULL UNIQUE"),
            ("token", "TEXT", "NOT NULL"),
            ("tags", "TEXT", ""),
        ]
    );
    assert_eq!(spec.primary_key().unwrap().name(), "account_id");
}

#[test]
fn renamed_and_custom_columns_round_trip() {
    let mapper = setup();
    mapper.create_table::<Account>(false).unwrap();

    let mut account = Account {
        email: "ada@example.com".into(),
        token: Uuid::new_v4(),
        nickname: Some("ignored".into()),
        tags: vec!["admin".into(), "beta".into()],
        ..Default::default()
    };
    mapper.insert(&mut account).unwrap();
    assert_eq!(account.id, 1);

    let mut read = Account {
        id: 1,
        ..Default::default()
    };
    mapper.find_by_primary_key(&mut read).unwrap();

    assert_eq!(read.email, account.email);
    assert_eq!(read.token, account.token);
    assert_eq!(read.tags, account.tags);
    assert_eq!(read.nickname, None);

    let mut log = mapper.backend().log();
    log.pop();
    assert_eq!(
        log.pop().sql,
        "INSERT INTO accounts (email_address, token, tags) VALUES (?, ?, ?);"
    );
    assert_eq!(
        log.pop().sql,
        "SELECT account_id, email_address, token, tags FROM accounts WHERE account_id = ?;"
    );
}

#[test]
fn column_constraints_are_enforced_by_the_database() {
    let mapper = setup();
    mapper.create_table::<Account>(false).unwrap();

    let mut first = Account {
        email: "same@example.com".into(),
        ..Default::default()
    };
    mapper.insert(&mut first).unwrap();

    let mut second = first.clone();
    let err = mapper.insert(&mut second).unwrap_err();

    assert!(err.is_backend());
    assert!(err.to_string().starts_with("insert into accounts: "));
}

#[test]
fn table_without_primary_key() {
    let mapper = setup();
    mapper.create_table::<Visit>(false).unwrap();

    for path in ["/", "/about", "/"] {
        let mut visit = Visit {
            path: path.into(),
            ..Default::default()
        };
        mapper.insert(&mut visit).unwrap();
    }

    let root_visits = mapper
        .select()
        .filter("path = ?", args!["/"])
        .count::<Visit>()
        .unwrap();
    assert_eq!(root_visits, 2);

    let deleted = mapper
        .delete(&Visit::default(), "path = ?", args!["/about"])
        .unwrap();
    assert_eq!(deleted, 1);
}
