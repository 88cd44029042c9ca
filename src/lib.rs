//! # Rust Logger Facade
//!
//! A thin structured-logging facade: a [`Logger`] forwards leveled calls with
//! typed attributes to a pluggable [`Handler`].
//!
//! ## Features
//!
//! - **Typed Attributes**: `attr::string`, `attr::int`, `attr::group`, ...
//! - **Pluggable Handlers**: text and JSON handlers included, or bring your own
//! - **Derivation**: bind attributes or groups without touching the parent logger
//! - **Never Fails the Caller**: handler errors are discarded

pub mod core;
pub mod handlers;
pub mod macros;

pub use crate::core::attr;

pub mod prelude {
    pub use crate::core::{
        Attr, Context, Handler, Level, Logger, LoggerError, Record, Result, TimestampFormat,
        Value,
    };
    pub use crate::handlers::{HandlerOptions, JsonHandler, Output, OutputFormat, TextHandler};
}

pub use crate::core::{
    Attr, Context, Handler, Level, Logger, LoggerError, Record, Result, TimestampFormat, Value,
};
pub use handlers::{HandlerOptions, JsonHandler, Output, OutputFormat, TextHandler};
