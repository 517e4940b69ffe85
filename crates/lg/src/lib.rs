#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lg` is a minimal, leveled logging interface. It defines the [`Log`]
//! trait, a no-op [`discard`] implementation and the small data types shared
//! by every adapter. The crate does not format or write anything itself:
//! concrete adapters live in sibling crates (`lg-writer` encodes to any
//! [`std::io::Write`], `lg-tracing` forwards to the `tracing` ecosystem, and
//! `lg-testing` routes output into test reports).
//!
//! # Design
//!
//! - Three levels only: DEBUG, WARN and ERROR.
//! - `warn_if_error`, `warn_if_func_error` and `warn_if_close_error` turn the
//!   common "log a cleanup failure and move on" pattern into one call.
//! - [`Log::with`] derives a new log carrying an extra structured field; the
//!   receiver is never mutated and keys are de-duplicated by [`Fields`].
//! - Caller-skip adjustment is an optional capability reached through
//!   [`add_caller_skip`], which hands back the same log when the adapter
//!   has no caller attribution.
//!
//! # Invariants
//!
//! - No method returns an error or panics because logging failed.
//! - Every emitting method is `#[track_caller]`; adapter layers do not change
//!   the reported call site.
//!
//! # Examples
//!
//! ```
//! use lg::{Closer, Log, LogExt};
//! use std::io;
//!
//! struct DataSource;
//!
//! impl Closer for DataSource {
//!     fn close(&mut self) -> io::Result<()> {
//!         Err(io::Error::other("failed to close due to gremlins"))
//!     }
//! }
//!
//! fn business_operation(log: &dyn Log) -> &'static str {
//!     let mut source = DataSource;
//!     // ... read from source ...
//!     log.warn_if_close_error(Some(&mut source));
//!     "RECEIPT_ABC123"
//! }
//!
//! let log = lg::discard().with_field("request", 7);
//! assert_eq!(business_operation(&*log), "RECEIPT_ABC123");
//! ```

mod discard;
mod fields;
mod level;
mod log;
mod macros;

pub use discard::{DiscardLog, discard};
pub use fields::{Field, Fields};
pub use level::Level;
pub use log::{BoxError, CallerSkip, Closer, Log, LogExt, add_caller_skip};
pub use serde_json::Value;
