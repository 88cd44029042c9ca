//! Output destinations shared by the bundled handlers

use crate::core::{Level, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Where a handler writes its formatted lines.
///
/// Cloning shares the destination, so derived handlers write to the same
/// stream as their parent.
#[derive(Clone)]
pub enum Output {
    /// `Error` records go to stderr, everything else to stdout
    Console,
    Stdout,
    Stderr,
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
}

impl Output {
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Output::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Append to the file at `path`, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;
        Ok(Self::writer(file))
    }

    pub fn is_console(&self) -> bool {
        !matches!(self, Output::Writer(_))
    }

    /// Write one line; a trailing newline is added
    pub fn write_line(&self, level: Level, line: &str) -> Result<()> {
        let result = match self {
            Output::Console if level == Level::Error => write_to(&mut std::io::stderr().lock(), line),
            Output::Console | Output::Stdout => write_to(&mut std::io::stdout().lock(), line),
            Output::Stderr => write_to(&mut std::io::stderr().lock(), line),
            Output::Writer(writer) => write_to(&mut *writer.lock(), line),
        };
        result.map_err(|e| LoggerError::io_operation("writing record", "output unavailable", e))
    }
}

fn write_to<W: Write + ?Sized>(writer: &mut W, line: &str) -> std::io::Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
