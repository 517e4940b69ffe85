//! crates/lg/src/level.rs
//! Severity levels understood by every [`Log`](crate::Log) implementation.

use std::fmt;

/// Level attached to each emitted entry.
///
/// The facade exposes only three levels. Adapters map them onto
/// whatever their backend understands.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Level {
    /// Diagnostic detail for developers.
    Debug,
    /// Something unexpected that did not stop the operation.
    Warn,
    /// A failed operation.
    Error,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Self; 3] = [Self::Debug, Self::Warn, Self::Error];

    /// Returns the upper-case token used by text encodings (`DEBUG`, `WARN`, `ERROR`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Returns the lower-case token used by structured encodings.
    #[must_use]
    pub const fn as_lowercase_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    /// Writes the upper-case token. Width and alignment flags are honoured so
    /// `{:<5}` pads `WARN` into a fixed column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
