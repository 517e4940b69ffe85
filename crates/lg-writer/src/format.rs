//! crates/lg-writer/src/format.rs
//! Output format selection and its parse error.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Encoding used for each emitted line.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Tab-separated console text with upper-case levels.
    #[default]
    Text,
    /// One JSON object per line with lower-case levels.
    Json,
    /// Compact text for test output: time of day, padded level, `file.rs:line` caller.
    Testing,
}

impl Format {
    /// Returns the canonical name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a writer log is misconfigured.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The format name is not one of `text`, `json` or `testing`.
    #[error("invalid log format {0:?}; expected text, json or testing")]
    UnknownFormat(String),
}

impl FromStr for Format {
    type Err = ConfigError;

    /// Parses a format name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Text, Self::Json, Self::Testing]
            .into_iter()
            .find(|format| name.eq_ignore_ascii_case(format.as_str()))
            .ok_or_else(|| ConfigError::UnknownFormat(s.to_owned()))
    }
}
