//! Recording handler shared by the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_logger_facade::{Attr, Context, Handler, Level, LoggerError, Record, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Everything a `RecordingHandler` family observed
#[derive(Default)]
pub struct Journal {
    pub enabled_calls: AtomicUsize,
    pub records: Mutex<Vec<Handled>>,
    pub with_attrs_calls: Mutex<Vec<Vec<Attr>>>,
    pub with_group_calls: Mutex<Vec<String>>,
}

/// A handled record plus the derivation state of the handler that received it
#[derive(Debug, Clone)]
pub struct Handled {
    pub record: Record,
    pub bound: Vec<Attr>,
    pub groups: Vec<String>,
    pub ctx_cancelled: bool,
}

impl Journal {
    pub fn records(&self) -> Vec<Handled> {
        self.records.lock().clone()
    }

    pub fn handle_count(&self) -> usize {
        self.records.lock().len()
    }
}

pub struct RecordingHandler {
    journal: Arc<Journal>,
    min_level: Option<Level>,
    fail: bool,
    bound: Vec<Attr>,
    groups: Vec<String>,
}

impl RecordingHandler {
    /// Handler enabled for every level
    pub fn new() -> (Self, Arc<Journal>) {
        Self::with_min_level(Some(Level::Debug))
    }

    /// `None` disables every level
    pub fn with_min_level(min_level: Option<Level>) -> (Self, Arc<Journal>) {
        let journal = Arc::new(Journal::default());
        let handler = Self {
            journal: Arc::clone(&journal),
            min_level,
            fail: false,
            bound: Vec::new(),
            groups: Vec::new(),
        };
        (handler, journal)
    }

    /// Every `handle` call records the record and then fails
    pub fn failing() -> (Self, Arc<Journal>) {
        let (mut handler, journal) = Self::new();
        handler.fail = true;
        (handler, journal)
    }

    fn derive(&self) -> Self {
        Self {
            journal: Arc::clone(&self.journal),
            min_level: self.min_level,
            fail: self.fail,
            bound: self.bound.clone(),
            groups: self.groups.clone(),
        }
    }
}

impl Handler for RecordingHandler {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        self.journal.enabled_calls.fetch_add(1, Ordering::SeqCst);
        self.min_level.is_some_and(|min| level >= min)
    }

    fn handle(&self, ctx: &Context, record: Record) -> Result<()> {
        self.journal.records.lock().push(Handled {
            record,
            bound: self.bound.clone(),
            groups: self.groups.clone(),
            ctx_cancelled: ctx.is_cancelled(),
        });
        if self.fail {
            return Err(LoggerError::writer("sink unavailable"));
        }
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        self.journal.with_attrs_calls.lock().push(attrs.to_vec());
        let mut derived = self.derive();
        derived.bound.extend_from_slice(attrs);
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        self.journal.with_group_calls.lock().push(name.to_string());
        let mut derived = self.derive();
        derived.groups.push(name.to_string());
        Arc::new(derived)
    }
}
