use crate::{stmt::Value, Error, Result};

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Broad category of a field's Rust type, used to infer the SQL column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Bool,
    String,
    Bytes,
    DateTime,

    /// Storable, but without an inferred SQL type. Columns for these fields
    /// must be registered with an explicit type.
    Other,
}

impl FieldKind {
    /// The SQL type inferred for this kind, if any.
    pub const fn sql_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Integer => Some("INTEGER"),
            FieldKind::Float => Some("REAL"),
            FieldKind::Bool => Some("BOOLEAN"),
            FieldKind::String | FieldKind::Bytes => Some("TEXT"),
            FieldKind::DateTime => Some("DATETIME"),
            FieldKind::Other => None,
        }
    }
}

/// A Rust type that can be stored in a column.
///
/// `to_value` produces the raw parameter bound on the write path;
/// `from_value` coerces a scanned value back into the field type on the read
/// path. Conversions are lenient in the same way SQL drivers usually are:
/// integers widen into floats, text parses into numbers, byte strings become
/// strings, and so on.
pub trait FieldValue: Sized + 'static {
    const KIND: FieldKind;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

fn parse_text<T: std::str::FromStr>(value: &Value) -> Option<T> {
    match value {
        Value::String(v) => v.trim().parse().ok(),
        Value::Bytes(v) => std::str::from_utf8(v).ok()?.trim().parse().ok(),
        _ => None,
    }
}

fn parse_float(value: &Value) -> Option<f64> {
    match *value {
        Value::F64(v) => Some(v),
        Value::I64(v) => Some(v as f64),
        Value::U64(v) => Some(v as f64),
        _ => parse_text(value),
    }
}

macro_rules! impl_integer {
    ( $( $ty:ident ),* ) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                fn from_value(value: Value) -> Result<Self> {
                    let converted = match value {
                        Value::I64(v) => $ty::try_from(v).ok(),
                        Value::U64(v) => $ty::try_from(v).ok(),
                        Value::F64(v) if v.fract() == 0.0 => $ty::try_from(v as i128).ok(),
                        Value::Bool(v) => Some(v as $ty),
                        _ => parse_text(&value),
                    };
                    converted.ok_or_else(|| Error::type_conversion(&value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        parse_float(&value).ok_or_else(|| Error::type_conversion(&value, "f64"))
    }
}

impl FieldValue for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::F64((*self).into())
    }

    fn from_value(value: Value) -> Result<Self> {
        parse_float(&value)
            .map(|v| v as f32)
            .ok_or_else(|| Error::type_conversion(&value, "f32"))
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Bool(v) => Some(*v),
            Value::I64(1) | Value::U64(1) => Some(true),
            Value::I64(0) | Value::U64(0) => Some(false),
            Value::String(v) => parse_bool(v),
            Value::Bytes(v) => std::str::from_utf8(v).ok().and_then(parse_bool),
            _ => None,
        };
        converted.ok_or_else(|| Error::type_conversion(&value, "bool"))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v)
                .map_err(|err| Error::type_conversion(&Value::Bytes(err.into_bytes()), "String")),
            Value::I64(v) => Ok(v.to_string()),
            Value::U64(v) => Ok(v.to_string()),
            Value::F64(v) => Ok(v.to_string()),
            Value::Bool(v) => Ok(v.to_string()),
            Value::Timestamp(v) => Ok(v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Null => Err(Error::type_conversion(&value, "String")),
        }
    }
}

impl FieldValue for Vec<u8> {
    const KIND: FieldKind = FieldKind::Bytes;

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(&value, "Vec<u8>")),
        }
    }
}

/// Text layouts accepted for timestamps besides RFC 3339. SQLite's own
/// `datetime()` produces the first one.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
}

impl FieldValue for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::DateTime;

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Timestamp(v) => Some(*v),
            Value::String(v) => parse_timestamp(v),
            Value::Bytes(v) => std::str::from_utf8(v).ok().and_then(parse_timestamp),
            Value::I64(v) => DateTime::from_timestamp(*v, 0),
            _ => None,
        };
        converted.ok_or_else(|| Error::type_conversion(&value, "DateTime<Utc>"))
    }
}

impl FieldValue for NaiveDateTime {
    const KIND: FieldKind = FieldKind::DateTime;

    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_utc())
    }

    fn from_value(value: Value) -> Result<Self> {
        DateTime::<Utc>::from_value(value).map(|dt| dt.naive_utc())
    }
}

impl FieldValue for uuid::Uuid {
    const KIND: FieldKind = FieldKind::Other;

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v.parse()?),
            Value::Bytes(v) => Ok(uuid::Uuid::from_slice(&v)?),
            value => Err(Error::type_conversion(&value, "Uuid")),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }
}
