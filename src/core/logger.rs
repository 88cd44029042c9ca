//! Logger facade over a pluggable handler

use super::{
    attr::Attr, context::Context, handler::Handler, level::Level, record::Record,
};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Context passed by the methods that take none
static BACKGROUND: Context = Context::background();

/// Typed front end that forwards leveled calls to a [`Handler`].
///
/// A `Logger` never changes after construction. [`Logger::with`] and
/// [`Logger::with_group`] derive a new logger around a derived handler and
/// leave the receiver untouched. Cloning is cheap and shares the handler.
///
/// Handler failures are discarded: a logging call always returns normally.
///
/// # Example
///
/// ```
/// use rust_logger_facade::prelude::*;
/// use rust_logger_facade::attr;
///
/// let logger = Logger::from_handler(TextHandler::console().with_colors(false));
///
/// logger.info("started", [attr::string("user", "alice"), attr::int("retries", 3)]);
///
/// let request_log = logger.with_group("req").with([attr::int("id", 7)]);
/// request_log.warn("slow response", [attr::float64("latency_ms", 812.5)]);
/// ```
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    #[must_use]
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// Wrap an owned handler
    #[must_use]
    pub fn from_handler<H: Handler + 'static>(handler: H) -> Self {
        Self::new(Arc::new(handler))
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// True when both loggers wrap the identical handler instance
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.handler), Arc::as_ptr(&other.handler))
    }

    pub fn enabled(&self, ctx: &Context, level: Level) -> bool {
        self.handler.enabled(ctx, level)
    }

    pub fn log<I>(&self, level: Level, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = Attr>,
    {
        self.log_ctx(&BACKGROUND, level, message, attrs);
    }

    pub fn log_ctx<I>(&self, ctx: &Context, level: Level, message: impl Into<String>, attrs: I)
    where
        I: IntoIterator<Item = Attr>,
    {
        if !self.handler.enabled(ctx, level) {
            return;
        }

        let record = Record::new(Utc::now(), level, message).with_attrs(attrs);
        let _ = self.handler.handle(ctx, record);
    }

    #[inline]
    pub fn debug<I: IntoIterator<Item = Attr>>(&self, message: impl Into<String>, attrs: I) {
        self.log(Level::Debug, message, attrs);
    }

    #[inline]
    pub fn info<I: IntoIterator<Item = Attr>>(&self, message: impl Into<String>, attrs: I) {
        self.log(Level::Info, message, attrs);
    }

    #[inline]
    pub fn warn<I: IntoIterator<Item = Attr>>(&self, message: impl Into<String>, attrs: I) {
        self.log(Level::Warn, message, attrs);
    }

    #[inline]
    pub fn error<I: IntoIterator<Item = Attr>>(&self, message: impl Into<String>, attrs: I) {
        self.log(Level::Error, message, attrs);
    }

    #[inline]
    pub fn debug_ctx<I: IntoIterator<Item = Attr>>(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: I,
    ) {
        self.log_ctx(ctx, Level::Debug, message, attrs);
    }

    #[inline]
    pub fn info_ctx<I: IntoIterator<Item = Attr>>(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: I,
    ) {
        self.log_ctx(ctx, Level::Info, message, attrs);
    }

    #[inline]
    pub fn warn_ctx<I: IntoIterator<Item = Attr>>(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: I,
    ) {
        self.log_ctx(ctx, Level::Warn, message, attrs);
    }

    #[inline]
    pub fn error_ctx<I: IntoIterator<Item = Attr>>(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: I,
    ) {
        self.log_ctx(ctx, Level::Error, message, attrs);
    }

    /// Derive a logger whose handler carries `attrs` on every record.
    ///
    /// With no attributes the result shares the receiver's handler.
    #[must_use]
    pub fn with<I: IntoIterator<Item = Attr>>(&self, attrs: I) -> Logger {
        let attrs: Vec<Attr> = attrs.into_iter().collect();
        if attrs.is_empty() {
            return self.clone();
        }
        Self::new(self.handler.with_attrs(&attrs))
    }

    /// Derive a logger that namespaces later attributes under `name`.
    ///
    /// An empty name returns a logger sharing the receiver's handler.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        Self::new(self.handler.with_group(name))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
