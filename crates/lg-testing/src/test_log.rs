//! crates/lg-testing/src/test_log.rs
//! The test-capture [`Log`] adapter.

use std::fmt::{self, Arguments};
use std::sync::{Arc, Mutex, PoisonError};

use lg::{CallerSkip, Fields, Level, Log, Value};

use crate::buffer::{CaptureBuffer, strip_line_ending};
use crate::factory::{Factory, testing_factory};
use crate::reporter::Reporter;

/// A [`Log`] that turns each emitting call into one test report entry.
///
/// The wrapped backend writes into a private [`CaptureBuffer`]. After every
/// call the buffer is drained, one trailing line terminator is removed and
/// the remainder goes to the [`Reporter`]. Calls that produce no output
/// report nothing.
pub struct TestLog {
    reporter: Arc<dyn Reporter>,
    factory: Factory,
    strict: bool,
    fields: Fields,
    caller_skip: usize,
    buffer: CaptureBuffer,
    backend: Arc<dyn Log>,
    lock: Mutex<()>,
}

impl TestLog {
    /// Wraps a testing-format [`WriterLog`](lg_writer::WriterLog) reporting to `reporter`.
    #[must_use]
    pub fn new<R>(reporter: Arc<R>) -> Self
    where
        R: Reporter + 'static,
    {
        Self::with_factory(reporter, testing_factory())
    }

    /// Wraps the backend built by `factory`.
    #[must_use]
    pub fn with_factory<R>(reporter: Arc<R>, factory: Factory) -> Self
    where
        R: Reporter + 'static,
    {
        Self::build(reporter, factory, false, Fields::new(), 0)
    }

    /// Sets whether ERROR entries are reported as failures.
    ///
    /// Entries at every other level are always informational.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether ERROR entries are reported as failures.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Fields re-applied to every rebuilt backend.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    fn build(
        reporter: Arc<dyn Reporter>,
        factory: Factory,
        strict: bool,
        fields: Fields,
        caller_skip: usize,
    ) -> Self {
        let buffer = CaptureBuffer::new();
        let mut backend = factory(buffer.clone());
        for field in &fields {
            backend = backend.with(&field.key, field.value.clone());
        }
        if caller_skip > 0 {
            backend = lg::add_caller_skip(&backend, caller_skip);
        }

        Self {
            reporter,
            factory,
            strict,
            fields,
            caller_skip,
            buffer,
            backend,
            lock: Mutex::new(()),
        }
    }

    fn rebuild(&self, fields: Fields, caller_skip: usize) -> Self {
        Self::build(
            Arc::clone(&self.reporter),
            Arc::clone(&self.factory),
            self.strict,
            fields,
            caller_skip,
        )
    }

    fn forward(&self, level: Level, output: &[u8]) {
        let line = String::from_utf8_lossy(strip_line_ending(output));
        if self.strict && level == Level::Error {
            self.reporter.report_failure(&line);
        } else {
            self.reporter.report_info(&line);
        }
    }
}

impl fmt::Debug for TestLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestLog")
            .field("strict", &self.strict)
            .field("fields", &self.fields)
            .field("caller_skip", &self.caller_skip)
            .finish_non_exhaustive()
    }
}

impl Log for TestLog {
    #[track_caller]
    fn log(&self, level: Level, args: Arguments<'_>) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.backend.log(level, args);
        let output = self.buffer.drain();
        if !output.is_empty() {
            self.forward(level, &output);
        }
    }

    fn with(&self, key: &str, value: Value) -> Arc<dyn Log> {
        Arc::new(self.rebuild(self.fields.with(key, value), self.caller_skip))
    }

    fn as_caller_skip(&self) -> Option<&dyn CallerSkip> {
        Some(self)
    }
}

impl CallerSkip for TestLog {
    fn add_caller_skip(&self, skip: usize) -> Arc<dyn Log> {
        Arc::new(self.rebuild(self.fields.clone(), self.caller_skip.saturating_add(skip)))
    }
}
