//! Bundled handler implementations

pub mod json;
pub mod options;
pub mod output;
pub mod text;

pub use json::JsonHandler;
pub use options::{HandlerOptions, OutputFormat, Target};
pub use output::Output;
pub use text::TextHandler;

// Re-export the trait so handler authors need a single import
pub use crate::core::Handler;
