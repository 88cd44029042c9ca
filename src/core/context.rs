//! Cancellation and deadline carrier passed through to handlers
//!
//! The logger never inspects a `Context`; it forwards it verbatim to
//! `Handler::enabled` and `Handler::handle`. Handlers may use it to skip
//! work for requests that have already been abandoned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Advisory cancellation/deadline context
///
/// Clones share the cancellation flag, so cancelling any clone is visible
/// to all of them.
///
/// # Example
///
/// ```
/// use rust_logger_facade::Context;
/// use std::time::Duration;
///
/// let ctx = Context::new().with_timeout(Duration::from_secs(30));
/// let child = ctx.clone();
///
/// assert!(ctx.cancel());
/// assert!(child.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Context {
    /// Neutral context: never cancelled, no deadline
    pub const fn background() -> Self {
        Self {
            cancelled: None,
            deadline: None,
        }
    }

    /// Cancellable context without a deadline
    pub fn new() -> Self {
        Self {
            cancelled: Some(Arc::new(AtomicBool::new(false))),
            deadline: None,
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let now = Instant::now();
        let deadline = now.checked_add(timeout).unwrap_or(now);
        self.with_deadline(deadline)
    }

    /// Mark the context cancelled.
    ///
    /// Returns `true` on the first successful cancellation, `false` if it was
    /// already cancelled or the context is not cancellable.
    pub fn cancel(&self) -> bool {
        match &self.cancelled {
            Some(flag) => flag
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok(),
            None => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Cancelled or past its deadline
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }
}
