#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/lg-testing/src/lib.rs
//!
//! # Overview
//!
//! `lg-testing` provides [`TestLog`], an [`lg::Log`] adapter for tests. Code
//! under test logs as usual; each entry shows up in the test's own report
//! instead of on the process output, and in strict mode an ERROR entry fails
//! the test.
//!
//! # Design
//!
//! A [`TestLog`] wraps a real backend, by default a testing-format
//! [`lg_writer::WriterLog`], that writes into a [`CaptureBuffer`]. After each
//! call the buffer is drained and the line is handed to a [`Reporter`]:
//!
//! - [`LibtestReporter`] prints through the harness's captured stdout and
//!   fails the test on drop when failures were reported.
//! - [`RecordingReporter`] keeps every [`Report`] for assertions.
//!
//! The backend is chosen per instance through a [`Factory`]. Deriving with
//! `with` or `add_caller_skip` builds a fresh buffer and backend, re-applying
//! the accumulated fields and skip.
//!
//! # Invariants
//!
//! - One emitting call yields at most one report entry.
//! - Exactly one trailing `\n` or `\r\n` is removed from the entry.
//! - The reported call site is the line that called the [`TestLog`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use lg::Log;
//! use lg_testing::{RecordingReporter, TestLog};
//!
//! let reporter = Arc::new(RecordingReporter::new());
//! let log = TestLog::new(Arc::clone(&reporter)).strict(true);
//!
//! log.warn(&[&"noted"]);
//! log.error(&[&"broken"]);
//!
//! assert_eq!(reporter.infos().len(), 1);
//! assert!(reporter.failures()[0].ends_with("broken"));
//! ```

mod buffer;
mod factory;
mod reporter;
mod test_log;

use std::sync::Arc;

pub use buffer::{CaptureBuffer, strip_line_ending};
pub use factory::{Factory, testing_factory, writer_factory};
pub use reporter::{LibtestReporter, RecordingReporter, Report, ReportKind, Reporter};
pub use test_log::TestLog;

/// A [`TestLog`] reporting through a fresh [`LibtestReporter`].
#[must_use]
pub fn new() -> TestLog {
    TestLog::new(Arc::new(LibtestReporter::new()))
}
