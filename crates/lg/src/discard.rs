//! crates/lg/src/discard.rs
//! No-operation log implementation.

use std::fmt::Arguments;
use std::sync::Arc;

use serde_json::Value;

use crate::level::Level;
use crate::log::Log;

/// Returns a [`Log`] whose output is discarded.
///
/// The `warn_if_func_error` and `warn_if_close_error` helpers still run the
/// function or close the resource they are handed, so cleanup performed
/// through them keeps happening; only the resulting log line is dropped.
///
/// # Examples
///
/// ```
/// use lg::{BoxError, Log};
///
/// let log = lg::discard();
/// let mut released = false;
/// log.warn_if_func_error(Some(&mut || -> Result<(), BoxError> {
///     released = true;
///     Err("close failed".into())
/// }));
/// assert!(released);
/// ```
#[must_use]
pub fn discard() -> Arc<dyn Log> {
    Arc::new(DiscardLog)
}

/// A log that drops every entry. See [`discard`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardLog;

impl Log for DiscardLog {
    #[inline]
    #[track_caller]
    fn log(&self, _level: Level, _args: Arguments<'_>) {}

    fn with(&self, _key: &str, _value: Value) -> Arc<dyn Log> {
        Arc::new(Self)
    }
}
