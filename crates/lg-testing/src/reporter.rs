//! crates/lg-testing/src/reporter.rs
//! Destinations for captured log entries.

use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Receives one report entry per emitting log call.
pub trait Reporter: Send + Sync {
    /// Records an informational entry.
    fn report_info(&self, line: &str);

    /// Records an entry that fails the test.
    fn report_failure(&self, line: &str);
}

/// Reporter for the built-in test harness.
///
/// Entries are printed with `println!`, which the harness captures per test
/// and shows when the test fails. Failures are also recorded; if any are
/// still recorded when the reporter is dropped outside a panic, the drop
/// panics and the enclosing test fails.
#[derive(Default)]
pub struct LibtestReporter {
    failures: Mutex<Vec<String>>,
}

impl LibtestReporter {
    /// Creates a reporter with no recorded failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures recorded so far.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the recorded failures, for tests that expect them.
    pub fn take_failures(&self) -> Vec<String> {
        std::mem::take(&mut *self.failures.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Reporter for LibtestReporter {
    fn report_info(&self, line: &str) {
        println!("{line}");
    }

    fn report_failure(&self, line: &str) {
        println!("{line}");
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}

impl fmt::Debug for LibtestReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibtestReporter")
            .field("failures", &self.failures())
            .finish()
    }
}

impl Drop for LibtestReporter {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }
        let failures = self.take_failures();
        assert!(
            failures.is_empty(),
            "{} error entries were logged:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

/// How a [`Report`] was delivered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReportKind {
    /// Delivered through [`Reporter::report_info`].
    Info,
    /// Delivered through [`Reporter::report_failure`].
    Failure,
}

/// One entry recorded by a [`RecordingReporter`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// Delivery channel.
    pub kind: ReportKind,
    /// The entry text without its line terminator.
    pub line: String,
}

/// Reporter that keeps every entry for later assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<Report>>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in delivery order.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines delivered through `report_info`.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.lines(ReportKind::Info)
    }

    /// Lines delivered through `report_failure`.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.lines(ReportKind::Failure)
    }

    fn lines(&self, kind: ReportKind) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter(|report| report.kind == kind)
            .map(|report| report.line)
            .collect()
    }

    fn push(&self, kind: ReportKind, line: &str) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Report {
                kind,
                line: line.to_owned(),
            });
    }
}

impl Reporter for RecordingReporter {
    fn report_info(&self, line: &str) {
        self.push(ReportKind::Info, line);
    }

    fn report_failure(&self, line: &str) {
        self.push(ReportKind::Failure, line);
    }
}
