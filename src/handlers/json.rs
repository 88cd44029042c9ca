//! JSON handler for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL format),
//! compatible with log aggregation tools like ELK, Loki, etc.

use super::output::Output;
use crate::core::{Attr, Context, Handler, Level, Record, Result, TimestampFormat, Value};
use serde_json::Map;
use std::path::Path;
use std::sync::Arc;

/// JSON lines handler
///
/// Every line starts with `time`, `level` and `msg`. Groups become nested
/// objects; attributes bound before a group was opened stay at the outer level.
///
/// An attribute never replaces a value already in its object. When its key is
/// taken (including by `time`, `level` or `msg`) it is written as
/// `attrs.<key>` instead. Groups with the same name merge.
#[derive(Clone)]
pub struct JsonHandler {
    output: Output,
    min_level: Level,
    timestamp_format: TimestampFormat,
    groups: Vec<String>,
    /// Bound attributes paired with the group depth they were added at
    bound: Vec<(usize, Attr)>,
}

impl JsonHandler {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            min_level: Level::Info,
            timestamp_format: TimestampFormat::default(),
            groups: Vec::new(),
            bound: Vec::new(),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Output::Stdout)
    }

    pub fn to_writer<W: std::io::Write + Send + 'static>(writer: W) -> Self {
        Self::new(Output::writer(writer))
    }

    /// Append JSON lines to the file at `path`
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Output::file(path)?))
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the JSON object for a record
    pub fn to_json(&self, record: &Record) -> serde_json::Value {
        let mut root = Map::new();
        root.insert("time".to_string(), self.timestamp_format.to_json_value(&record.time));
        root.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        root.insert("msg".to_string(), serde_json::Value::String(record.message.clone()));

        for (depth, attr) in &self.bound {
            if is_visible(attr) {
                insert_attr(nested(&mut root, &self.groups[..*depth]), attr);
            }
        }

        // Open groups only appear when the record adds something to them
        if record.attrs().iter().any(is_visible) {
            let target = nested(&mut root, &self.groups);
            for attr in record.attrs() {
                insert_attr(target, attr);
            }
        }

        serde_json::Value::Object(root)
    }
}

impl Handler for JsonHandler {
    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        level >= self.min_level && !ctx.is_done()
    }

    fn handle(&self, ctx: &Context, record: Record) -> Result<()> {
        if ctx.is_done() {
            return Ok(());
        }
        let json = serde_json::to_string(&self.to_json(&record))?;
        self.output.write_line(record.level, &json)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        let depth = self.groups.len();
        derived
            .bound
            .extend(attrs.iter().cloned().map(|attr| (depth, attr)));
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        derived.groups.push(name.to_string());
        Arc::new(derived)
    }
}

fn is_visible(attr: &Attr) -> bool {
    match &attr.value {
        Value::Group(attrs) => attrs.iter().any(is_visible),
        _ => !attr.key.is_empty(),
    }
}

/// First key, starting from `key`, that is vacant or (for groups) already an object
fn free_key(map: &Map<String, serde_json::Value>, key: &str, group: bool) -> String {
    let mut key = key.to_string();
    loop {
        match map.get(&key) {
            None => return key,
            Some(existing) if group && existing.is_object() => return key,
            Some(_) => key = format!("attrs.{}", key),
        }
    }
}

fn nested<'a>(
    mut map: &'a mut Map<String, serde_json::Value>,
    path: &[String],
) -> &'a mut Map<String, serde_json::Value> {
    for name in path {
        let key = free_key(map, name, true);
        map = map
            .entry(key)
            .or_insert_with(|| serde_json::Value::Object(Map::new()))
            .as_object_mut()
            .expect("free_key yields a vacant or object slot");
    }
    map
}

fn insert_attr(map: &mut Map<String, serde_json::Value>, attr: &Attr) {
    if !is_visible(attr) {
        return;
    }
    match &attr.value {
        Value::Group(attrs) if attr.key.is_empty() => {
            for inner in attrs {
                insert_attr(map, inner);
            }
        }
        Value::Group(attrs) => {
            let target = nested(map, std::slice::from_ref(&attr.key));
            for inner in attrs {
                insert_attr(target, inner);
            }
        }
        value => {
            let key = free_key(map, &attr.key, false);
            map.insert(key, value.to_json_value());
        }
    }
}
