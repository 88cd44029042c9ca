//! Handler configuration
//!
//! `HandlerOptions` selects and configures one of the bundled handlers. It
//! deserializes from JSON so the logging setup can live in a config file:
//!
//! ```
//! use rust_logger_facade::handlers::{HandlerOptions, OutputFormat};
//! use rust_logger_facade::Level;
//!
//! let options = HandlerOptions::from_json(r#"{ "level": "debug", "format": "json" }"#).unwrap();
//! assert_eq!(options.level, Level::Debug);
//! assert_eq!(options.format, OutputFormat::Json);
//!
//! let logger = options.build_logger();
//! ```

use super::{json::JsonHandler, output::Output, text::TextHandler};
use crate::core::{Handler, Level, Logger, LoggerError, Result, TimestampFormat};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Line format of the built handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `[timestamp] [LEVEL] message key=value ...`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Console stream the built handler writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Errors to stderr, everything else to stdout
    #[default]
    Console,
    Stdout,
    Stderr,
}

impl From<Target> for Output {
    fn from(target: Target) -> Self {
        match target {
            Target::Console => Output::Console,
            Target::Stdout => Output::Stdout,
            Target::Stderr => Output::Stderr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandlerOptions {
    pub level: Level,
    pub format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    /// Only honoured by the text format
    pub colors: bool,
    pub target: Target,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: OutputFormat::Text,
            timestamp_format: TimestampFormat::default(),
            colors: true,
            target: Target::Console,
        }
    }
}

impl HandlerOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("HandlerOptions", e.to_string()))
    }

    pub fn build(&self) -> Arc<dyn Handler> {
        self.build_with_output(self.target.into())
    }

    /// Build against an explicit output instead of `target`
    pub fn build_with_output(&self, output: Output) -> Arc<dyn Handler> {
        match self.format {
            OutputFormat::Text => Arc::new(
                TextHandler::new(output)
                    .with_min_level(self.level)
                    .with_colors(self.colors)
                    .with_timestamp_format(self.timestamp_format.clone()),
            ),
            OutputFormat::Json => Arc::new(
                JsonHandler::new(output)
                    .with_min_level(self.level)
                    .with_timestamp_format(self.timestamp_format.clone()),
            ),
        }
    }

    pub fn build_logger(&self) -> Logger {
        Logger::new(self.build())
    }
}
