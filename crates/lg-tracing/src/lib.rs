#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/lg-tracing/src/lib.rs
//!
//! # Overview
//!
//! `lg-tracing` bridges the [`lg::Log`] interface to the `tracing`
//! ecosystem. Every entry becomes a `tracing` event under the `lg` target, so
//! whatever subscriber the application installed decides filtering, layout
//! and destination.
//!
//! # Design
//!
//! [`TracingLog`] records the call site as a `caller` field and the
//! accumulated [`lg::Fields`] as a single `fields` field rendered
//! `key=value`. `tracing` callsites are static, so the dynamic keys of the
//! field set cannot become individual event fields.
//!
//! The adapter has no caller-skip capability. [`lg::add_caller_skip`] hands
//! back the same instance.
//!
//! # Examples
//!
//! ```
//! use lg::{Log, LogExt};
//! use lg_tracing::TracingLog;
//!
//! let log = TracingLog::new().with_field("shard", 3);
//! log.warn(&[&"rebalancing"]);
//! ```

mod tracing_log;

pub use tracing_log::{TARGET, TracingLog};
