//! Text handler producing one human-readable line per record

use super::output::Output;
use crate::core::{Attr, Context, Handler, Level, Record, Result, TimestampFormat, Value};
#[cfg(feature = "console")]
use colored::Colorize;
use std::fmt::Write as _;
use std::sync::Arc;

/// Line format: `[timestamp] [LEVEL] message key=value ...`
///
/// Groups qualify keys with dot-separated prefixes (`req.id=7`). Attributes
/// bound with `with_attrs` are rendered once, at derivation time.
#[derive(Clone)]
pub struct TextHandler {
    output: Output,
    min_level: Level,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    groups: Vec<String>,
    bound: String,
}

impl TextHandler {
    pub fn new(output: Output) -> Self {
        let use_colors = output.is_console();
        Self {
            output,
            min_level: Level::Info,
            use_colors,
            timestamp_format: TimestampFormat::default(),
            groups: Vec::new(),
            bound: String::new(),
        }
    }

    /// Console output: errors to stderr, the rest to stdout
    pub fn console() -> Self {
        Self::new(Output::Console)
    }

    pub fn to_writer<W: std::io::Write + Send + 'static>(writer: W) -> Self {
        Self::new(Output::writer(writer))
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Colour the level column (only with the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the timestamp format for this handler
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_facade::handlers::TextHandler;
    /// use rust_logger_facade::TimestampFormat;
    ///
    /// let handler = TextHandler::console()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    fn prefix(&self) -> String {
        let mut prefix = String::new();
        for group in &self.groups {
            prefix.push_str(group);
            prefix.push('.');
        }
        prefix
    }

    fn level_column(&self, level: Level) -> String {
        let padded = format!("{:5}", level.to_str());
        #[cfg(feature = "console")]
        if self.use_colors {
            return padded.color(level.color_code()).to_string();
        }
        padded
    }

    /// Render a record without writing it
    pub fn format_record(&self, record: &Record) -> String {
        let mut line = format!(
            "[{}] [{}] {}",
            self.timestamp_format.format(&record.time),
            self.level_column(record.level),
            sanitize_message(&record.message)
        );
        line.push_str(&self.bound);

        let prefix = self.prefix();
        for attr in record.attrs() {
            append_attr(&mut line, &prefix, attr);
        }
        line
    }
}

impl Handler for TextHandler {
    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        level >= self.min_level && !ctx.is_done()
    }

    fn handle(&self, ctx: &Context, record: Record) -> Result<()> {
        if ctx.is_done() {
            return Ok(());
        }
        let line = self.format_record(&record);
        self.output.write_line(record.level, &line)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        let prefix = self.prefix();
        for attr in attrs {
            append_attr(&mut derived.bound, &prefix, attr);
        }
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        derived.groups.push(escape_value(name));
        Arc::new(derived)
    }
}

/// Escape newlines, carriage returns and tabs so one record stays one line
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn append_attr(out: &mut String, prefix: &str, attr: &Attr) {
    match &attr.value {
        Value::Group(attrs) => {
            if attrs.is_empty() {
                return;
            }
            // An unnamed group inlines its members
            let nested = if attr.key.is_empty() {
                prefix.to_string()
            } else {
                format!("{}{}.", prefix, escape_value(&attr.key))
            };
            for inner in attrs {
                append_attr(out, &nested, inner);
            }
        }
        value => {
            if attr.key.is_empty() {
                return;
            }
            let _ = write!(
                out,
                " {}{}={}",
                prefix,
                escape_value(&attr.key),
                escape_value(&value.to_string())
            );
        }
    }
}

/// Quote a value if it contains spaces, quotes, `=` or control characters
fn escape_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c == ' ' || c == '"' || c == '=' || c.is_control());
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{{{:04x}}}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
