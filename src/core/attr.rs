//! Typed key-value attributes attached to records
//!
//! This module provides:
//! - `Value`: the fixed set of supported value kinds
//! - `Attr`: a key bound to a `Value`
//! - free constructor functions (`string`, `int`, `group`, ...) for each kind

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Value carried by an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Duration(Duration),
    Time(DateTime<Utc>),
    /// Arbitrary value, captured through serde
    Any(serde_json::Value),
    /// Ordered, nested attributes
    Group(Vec<Attr>),
}

impl Value {
    /// Short name of the value kind
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Duration(_) => "duration",
            Value::Time(_) => "time",
            Value::Any(_) => "any",
            Value::Group(_) => "group",
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Durations become integer nanoseconds and groups become nested objects.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Duration(d) => {
                let nanos = u64::try_from(d.as_nanos()).unwrap_or(u64::MAX);
                serde_json::Value::Number(nanos.into())
            }
            Value::Time(t) => {
                serde_json::Value::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Any(v) => v.clone(),
            Value::Group(attrs) => {
                let mut map = serde_json::Map::new();
                for attr in attrs {
                    map.insert(attr.key.clone(), attr.value.to_json_value());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Duration(d) => write!(f, "{:?}", d),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Any(v) => match v {
                serde_json::Value::String(s) => write!(f, "{}", s),
                other => write!(f, "{}", other),
            },
            Value::Group(attrs) => {
                write!(f, "[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", attr)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

/// A key-value pair attached to a record
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// True for a group attribute holding no attributes
    pub fn is_empty_group(&self) -> bool {
        matches!(&self.value, Value::Group(attrs) if attrs.is_empty())
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

pub fn string(key: impl Into<String>, value: impl Into<String>) -> Attr {
    Attr::new(key, Value::String(value.into()))
}

pub fn bool(key: impl Into<String>, value: bool) -> Attr {
    Attr::new(key, Value::Bool(value))
}

pub fn int(key: impl Into<String>, value: i64) -> Attr {
    Attr::new(key, Value::Int(value))
}

pub fn float64(key: impl Into<String>, value: f64) -> Attr {
    Attr::new(key, Value::Float(value))
}

pub fn duration(key: impl Into<String>, value: Duration) -> Attr {
    Attr::new(key, Value::Duration(value))
}

pub fn time(key: impl Into<String>, value: DateTime<Utc>) -> Attr {
    Attr::new(key, Value::Time(value))
}

/// Capture any serializable value.
///
/// A value that fails to serialize is kept as the string `!ERROR:<reason>`.
pub fn any<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Attr {
    let value = serde_json::to_value(value)
        .unwrap_or_else(|e| serde_json::Value::String(format!("!ERROR:{}", e)));
    Attr::new(key, Value::Any(value))
}

pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) -> Attr {
    Attr::new(key, Value::Group(attrs.into_iter().collect()))
}
