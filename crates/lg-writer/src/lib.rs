#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/lg-writer/src/lib.rs
//!
//! # Overview
//!
//! `lg-writer` provides [`WriterLog`], the [`lg::Log`] adapter that renders
//! each entry as a single line and writes it to any [`std::io::Write`] sink.
//! Three encodings are available through [`Format`]: tab-separated console
//! text, one JSON object per line, and a compact variant intended for test
//! output.
//!
//! # Design
//!
//! A [`WriterLog`] owns an immutable [`Config`] snapshot, so several logs
//! can share one sink while reporting different elements. Instances derived
//! with [`lg::Log::with`] or [`lg::CallerSkip::add_caller_skip`] share the
//! sink and the encoder and copy only their field set.
//!
//! The call site is tracked with `#[track_caller]` through every layer of
//! the [`lg::Log`] trait. A non-zero caller skip walks the stack outward
//! from that site; when the walk finds nothing, as without debug info, the
//! tracked site is kept.
//!
//! # Invariants
//!
//! - Every entry is written with one `write_all` while the sink lock is held
//!   and ends with exactly one `\n`.
//! - A disabled element leaves no placeholder or separator behind.
//! - Field keys are unique and keep their first-insertion order. In JSON a
//!   field named like a standard key is written as `fields.<key>`.
//! - Entries at a level outside [`Config::levels`] produce no output.
//! - Sink failures are swallowed; with the `tracing` feature they are
//!   reported at debug level under the `lg_writer` target.
//!
//! # Errors
//!
//! Only construction from a format name can fail, with
//! [`ConfigError::UnknownFormat`].
//!
//! # Examples
//!
//! ```
//! use lg::{Log, LogExt};
//! use lg_writer::{Config, Format, WriterLog};
//! use std::io::{self, Write};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Clone, Default)]
//! struct Shared(Arc<Mutex<Vec<u8>>>);
//!
//! impl Write for Shared {
//!     fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
//!         self.0.lock().unwrap().extend_from_slice(buf);
//!         Ok(buf.len())
//!     }
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let out = Shared::default();
//! let config = Config::default().with_timestamp(false).with_caller(false);
//! let log = WriterLog::with_config(out.clone(), Format::Json, config);
//! log.with_field("attempt", 2).warn(&[&"retrying"]);
//!
//! let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
//! assert_eq!(text, "{\"level\":\"warn\",\"message\":\"retrying\",\"attempt\":2}\n");
//! ```

mod caller;
mod config;
mod encoder;
mod format;
mod sink;
mod writer_log;

pub use caller::Caller;
pub use config::{Config, Levels};
pub use format::{ConfigError, Format};
pub use writer_log::WriterLog;
