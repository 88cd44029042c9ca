//! Handler trait for pluggable log backends

use super::{attr::Attr, context::Context, error::Result, level::Level, record::Record};
use std::sync::Arc;

/// Backend that filters, formats and delivers records.
///
/// `with_attrs` and `with_group` return a derived handler and must leave the
/// receiver unchanged.
pub trait Handler: Send + Sync {
    fn enabled(&self, ctx: &Context, level: Level) -> bool;
    fn handle(&self, ctx: &Context, record: Record) -> Result<()>;
    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler>;
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}
