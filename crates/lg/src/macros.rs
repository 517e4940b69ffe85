//! crates/lg/src/macros.rs
//! Format-string convenience macros.
//!
//! These expand to the `*f` methods of [`Log`](crate::Log) with
//! `format_args!`, so the reported caller is the macro invocation.

/// Logs a formatted message at DEBUG level.
///
/// ```
/// let log = lg::discard();
/// lg::lg_debug!(log, "loaded {} entries", 3);
/// ```
#[macro_export]
macro_rules! lg_debug {
    ($log:expr, $($arg:tt)+) => {
        {
            use $crate::Log as _;
            $log.debugf(format_args!($($arg)+))
        }
    };
}

/// Logs a formatted message at WARN level.
#[macro_export]
macro_rules! lg_warn {
    ($log:expr, $($arg:tt)+) => {
        {
            use $crate::Log as _;
            $log.warnf(format_args!($($arg)+))
        }
    };
}

/// Logs a formatted message at ERROR level.
#[macro_export]
macro_rules! lg_error {
    ($log:expr, $($arg:tt)+) => {
        {
            use $crate::Log as _;
            $log.errorf(format_args!($($arg)+))
        }
    };
}
