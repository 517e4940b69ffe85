//! crates/lg/src/log.rs
//! The [`Log`] contract, the caller-skip capability and their helpers.

use std::error::Error;
use std::fmt::{self, Arguments, Display};
use std::io;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::level::Level;

/// Boxed error returned by functions handed to [`Log::warn_if_func_error`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Resource with a fallible close operation.
///
/// Used by [`Log::warn_if_close_error`], which closes the resource and logs any
/// failure instead of letting it escape a cleanup path.
pub trait Closer {
    /// Releases the resource.
    fn close(&mut self) -> io::Result<()>;
}

/// Leveled logging interface.
///
/// Implementations only have to provide [`log`](Self::log) and
/// [`with`](Self::with); the leveled helpers and the `warn_if_*` family are
/// routed through `log`. None of the methods report failure: logging is a
/// diagnostic side channel and never participates in control flow.
///
/// # Caller attribution
///
/// Every emitting method is `#[track_caller]`, including the required
/// [`log`](Self::log). Adapters that wrap other adapters therefore pass the
/// outer call site through unchanged, also across `dyn Log` calls, and the
/// `warn_if_*` helpers report the line they were called from.
///
/// # Examples
///
/// ```
/// use lg::{Log, discard, lg_warn};
///
/// let log = discard();
/// log.debug(&[&"Hello", &"World"]);
/// log.warnf(format_args!("retry {} of {}", 1, 3));
/// lg_warn!(log, "retry {} of {}", 2, 3);
/// ```
pub trait Log: Send + Sync {
    /// Emits one entry at `level`.
    #[track_caller]
    fn log(&self, level: Level, args: Arguments<'_>);

    /// Returns a derived log carrying `key` bound to `value`.
    ///
    /// The receiver is not modified. Re-binding a key that is already present
    /// replaces its value rather than adding a duplicate.
    fn with(&self, key: &str, value: Value) -> Arc<dyn Log>;

    /// Probes for the optional caller-skip capability.
    ///
    /// Prefer [`add_caller_skip`] over calling this directly.
    fn as_caller_skip(&self) -> Option<&dyn CallerSkip> {
        None
    }

    /// Logs the concatenation of `parts` at DEBUG level.
    #[track_caller]
    fn debug(&self, parts: &[&dyn Display]) {
        self.log(Level::Debug, format_args!("{}", Concat(parts)));
    }

    /// Logs a formatted message at DEBUG level.
    #[track_caller]
    fn debugf(&self, args: Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Logs the concatenation of `parts` at WARN level.
    #[track_caller]
    fn warn(&self, parts: &[&dyn Display]) {
        self.log(Level::Warn, format_args!("{}", Concat(parts)));
    }

    /// Logs a formatted message at WARN level.
    #[track_caller]
    fn warnf(&self, args: Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Logs the concatenation of `parts` at ERROR level.
    #[track_caller]
    fn error(&self, parts: &[&dyn Display]) {
        self.log(Level::Error, format_args!("{}", Concat(parts)));
    }

    /// Logs a formatted message at ERROR level.
    #[track_caller]
    fn errorf(&self, args: Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// No-op if `err` is `None`; otherwise logs it at WARN level.
    #[track_caller]
    fn warn_if_error(&self, err: Option<&dyn Error>) {
        if let Some(err) = err {
            self.log(Level::Warn, format_args!("{err}"));
        }
    }

    /// No-op if `f` is `None`; otherwise runs `f` once and logs its error, if
    /// any, at WARN level.
    #[track_caller]
    fn warn_if_func_error(&self, f: Option<&mut dyn FnMut() -> Result<(), BoxError>>) {
        let Some(f) = f else {
            return;
        };
        if let Err(err) = f() {
            self.log(Level::Warn, format_args!("{err}"));
        }
    }

    /// No-op if `closer` is `None`; otherwise closes it and logs the close
    /// error, if any, at WARN level.
    ///
    /// Prefer this to `warn_if_func_error` for resources that may be absent:
    /// the presence check happens before any method on the resource is
    /// reached.
    #[track_caller]
    fn warn_if_close_error(&self, closer: Option<&mut dyn Closer>) {
        let Some(closer) = closer else {
            return;
        };
        if let Err(err) = closer.close() {
            self.log(Level::Warn, format_args!("{err}"));
        }
    }
}

/// Optional capability: adjusting the frame reported as the caller.
///
/// Adapters without caller attribution simply do not implement it, and
/// [`add_caller_skip`] falls back to the same instance.
pub trait CallerSkip {
    /// Returns a derived log that skips `skip` additional frames when
    /// resolving the caller.
    ///
    /// Implementations that find outer frames by walking the stack need
    /// debug info to do so. Without it the derived log reports the tracked
    /// call site, as if no skip had been added.
    fn add_caller_skip(&self, skip: usize) -> Arc<dyn Log>;
}

/// Returns `log` with `skip` additional caller frames skipped, or `log`
/// itself when the implementation does not support caller skip.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// let log = lg::discard();
/// let skipped = lg::add_caller_skip(&log, 1);
/// assert!(Arc::ptr_eq(&log, &skipped));
/// ```
pub fn add_caller_skip(log: &Arc<dyn Log>, skip: usize) -> Arc<dyn Log> {
    match log.as_caller_skip() {
        Some(capability) => capability.add_caller_skip(skip),
        None => Arc::clone(log),
    }
}

/// Convenience methods available on every [`Log`].
pub trait LogExt: Log {
    /// Like [`Log::with`], accepting any serializable value.
    ///
    /// A value that fails to serialize is recorded as the serializer's error
    /// text rather than reported to the caller.
    fn with_field<V>(&self, key: &str, value: V) -> Arc<dyn Log>
    where
        V: Serialize,
    {
        let value = serde_json::to_value(value).unwrap_or_else(|err| Value::String(err.to_string()));
        self.with(key, value)
    }
}

impl<L: Log + ?Sized> LogExt for L {}

/// Joins display values with no separator.
struct Concat<'a>(&'a [&'a dyn Display]);

impl Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.0 {
            part.fmt(f)?;
        }
        Ok(())
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    #[track_caller]
    fn log(&self, level: Level, args: Arguments<'_>) {
        (**self).log(level, args);
    }

    fn with(&self, key: &str, value: Value) -> Arc<dyn Log> {
        (**self).with(key, value)
    }

    fn as_caller_skip(&self) -> Option<&dyn CallerSkip> {
        (**self).as_caller_skip()
    }
}
