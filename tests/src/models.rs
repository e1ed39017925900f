//! Record types shared by the integration tests.

use chrono::{DateTime, Utc};
use rowbind::{schema::FieldValue, Fields, Record, Result, TableSpec, Value};
use std::sync::OnceLock;
use uuid::Uuid;

/// Every column is discovered from the struct's public fields.
#[derive(Debug, Default, Clone, PartialEq, Fields)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub published: bool,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub body: Vec<u8>,

    /// Not public, so never mapped
    views: u32,
}

impl Post {
    pub fn new(title: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            created_at,
            ..Default::default()
        }
    }

    /// A blank post carrying only a primary key, ready to be loaded.
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn views(&self) -> u32 {
        self.views
    }

    pub fn set_views(&mut self, views: u32) {
        self.views = views;
    }
}

impl Record for Post {
    fn table_spec() -> &'static TableSpec {
        static SPEC: OnceLock<TableSpec> = OnceLock::new();
        SPEC.get_or_init(|| {
            TableSpec::builder::<Post>()
                .set_table("posts")
                .generic_other_fields()
                .set_primary_key("id")
                .set_constraints([("title", "NOT NULL")])
                .build()
        })
    }
}

/// Renamed columns, a custom column and an excluded field.
#[derive(Debug, Default, Clone, PartialEq, Fields)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub token: Uuid,
    pub nickname: Option<String>,

    #[rowbind(skip)]
    pub tags: Vec<String>,
}

impl Record for Account {
    fn table_spec() -> &'static TableSpec {
        static SPEC: OnceLock<TableSpec> = OnceLock::new();
        SPEC.get_or_init(|| {
            TableSpec::builder::<Account>()
                .set_table("accounts")
                .set_field_column_type("id", "account_id", "INTEGER", "")
                .set_field_column_type("email", "email_address", "TEXT", "NOT NULL UNIQUE")
                .set_field_column_type("token", "token", "TEXT", "NOT NULL")
                .ignore_fields(&["nickname"])
                .set_column("tags", "TEXT", "", load_tags, save_tags)
                .generic_other_fields()
                .set_primary_key("account_id")
                .build()
        })
    }
}

fn load_tags(account: &Account) -> Result<Value> {
    Ok(Value::from(account.tags.join(",")))
}

fn save_tags(account: &mut Account, value: Value) -> Result<()> {
    let tags = String::from_value(value)?;
    account.tags = tags
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    Ok(())
}

/// A table without a primary key.
#[derive(Debug, Default, Clone, PartialEq, Fields)]
pub struct Visit {
    pub path: String,
    pub at: DateTime<Utc>,
}

impl Record for Visit {
    fn table_spec() -> &'static TableSpec {
        static SPEC: OnceLock<TableSpec> = OnceLock::new();
        SPEC.get_or_init(|| {
            TableSpec::builder::<Visit>()
                .set_table("visits")
                .generic_other_fields()
                .build()
        })
    }
}
