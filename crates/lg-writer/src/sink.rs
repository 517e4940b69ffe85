//! crates/lg-writer/src/sink.rs
//! Shared destination for encoded lines.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A writer shared by every log derived from the same root.
///
/// Each encoded line is handed to the writer in a single `write_all` call
/// while the lock is held, so concurrent logs never interleave within a line.
/// Write failures are swallowed: logging never reports errors to its caller.
#[derive(Clone)]
pub(crate) struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    pub(crate) fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub(crate) fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Writes one complete line and flushes it.
    pub(crate) fn write_line(&self, line: &[u8]) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = writer.write_all(line).and_then(|()| writer.flush());
        drop(writer);
        if let Err(error) = result {
            report_write_error(&error);
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}

#[cfg(feature = "tracing")]
fn report_write_error(error: &io::Error) {
    tracing::debug!(target: "lg_writer", %error, "dropping log line after write failure");
}

#[cfg(not(feature = "tracing"))]
const fn report_write_error(_error: &io::Error) {}
