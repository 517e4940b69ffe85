#![deny(unsafe_code)]
#![deny(missing_docs)]

//! src/lib.rs
//!
//! # Overview
//!
//! `lg-suite` bundles the `lg` logging interface with its adapters:
//!
//! - [`writer`]: [`writer::WriterLog`] encodes text, JSON or testing lines
//!   into any [`std::io::Write`].
//! - [`tracing`]: [`tracing::TracingLog`] forwards entries as `tracing`
//!   events.
//! - [`testing`]: [`testing::TestLog`] routes entries into test reports.
//!
//! The interface itself is re-exported at the crate root, so application
//! code can depend on this crate alone and accept `&dyn Log` or
//! `Arc<dyn Log>` everywhere.
//!
//! # Examples
//!
//! ```
//! use lg_suite::writer::{Config, Format, WriterLog};
//! use lg_suite::{Log, LogExt};
//!
//! let log = WriterLog::with_config(std::io::sink(), Format::Json, Config::default());
//! log.with_field("user", "ada").warn(&[&"password expires soon"]);
//! ```

pub use lg::{
    BoxError, CallerSkip, Closer, DiscardLog, Field, Fields, Level, Log, LogExt, Value,
    add_caller_skip, discard, lg_debug, lg_error, lg_warn,
};

/// Writer backend: [`writer::WriterLog`] and its configuration.
pub mod writer {
    pub use lg_writer::{Caller, Config, ConfigError, Format, Levels, WriterLog};
}

/// Adapter forwarding entries to the `tracing` ecosystem.
pub mod tracing {
    pub use lg_tracing::{TARGET, TracingLog};
}

/// Test-capture adapter and reporters.
pub mod testing {
    pub use lg_testing::{
        CaptureBuffer, Factory, LibtestReporter, RecordingReporter, Report, ReportKind, Reporter,
        TestLog, new, strip_line_ending, testing_factory, writer_factory,
    };
}
