//! Core facade types and traits

pub mod attr;
pub mod context;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;
pub mod timestamp;

pub use attr::{Attr, Value};
pub use context::Context;
pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use level::Level;
pub use logger::Logger;
pub use record::Record;
pub use timestamp::TimestampFormat;
