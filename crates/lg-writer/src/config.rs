//! crates/lg-writer/src/config.rs
//! Per-instance writer configuration.

use lg::Level;

/// Set of levels a [`WriterLog`](crate::WriterLog) emits.
///
/// Entries at a level outside the set are dropped before any formatting
/// happens, so they cost no caller resolution and produce no output.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Levels(u8);

impl Levels {
    /// Every level.
    pub const ALL: Self = Self(0b111);
    /// No level; the log emits nothing.
    pub const NONE: Self = Self(0);

    const fn bit(level: Level) -> u8 {
        match level {
            Level::Debug => 0b001,
            Level::Warn => 0b010,
            Level::Error => 0b100,
        }
    }

    /// Exactly the given levels.
    #[must_use]
    pub fn only(levels: &[Level]) -> Self {
        levels
            .iter()
            .fold(Self::NONE, |set, &level| set.with(level))
    }

    /// The set plus `level`.
    #[must_use]
    pub const fn with(self, level: Level) -> Self {
        Self(self.0 | Self::bit(level))
    }

    /// The set without `level`.
    #[must_use]
    pub const fn without(self, level: Level) -> Self {
        Self(self.0 & !Self::bit(level))
    }

    /// Whether entries at `level` are emitted.
    #[must_use]
    pub const fn contains(self, level: Level) -> bool {
        self.0 & Self::bit(level) != 0
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::ALL
    }
}

/// Which optional elements a [`WriterLog`](crate::WriterLog) reports.
///
/// Each toggle is independent. A disabled element disappears from the output
/// entirely; it is never rendered as an empty placeholder.
///
/// The configuration is an immutable snapshot owned by each log instance, so
/// two logs writing to the same sink can report different elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Report the entry timestamp.
    pub timestamp: bool,
    /// Render timestamps in UTC instead of the local offset.
    pub utc: bool,
    /// Report the entry level.
    pub level: bool,
    /// Report the call site.
    pub caller: bool,
    /// Append the name of the calling function to the call site.
    ///
    /// The name comes from the symbol table and needs debug info; without it
    /// the call site is reported without a name.
    pub function: bool,
    /// Frames to skip above the tracked call site when resolving the caller.
    ///
    /// A non-zero skip walks the stack and needs debug info to match frames
    /// to source lines. Without it (a default release build, for instance)
    /// the tracked call site is reported unchanged.
    pub caller_skip: usize,
    /// Levels that are emitted at all.
    pub levels: Levels,
}

impl Config {
    /// Configuration with every optional element switched off.
    ///
    /// Level selection is not an element: a quiet configuration still emits
    /// every level.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            timestamp: false,
            utc: false,
            level: false,
            caller: false,
            function: false,
            caller_skip: 0,
            levels: Levels::ALL,
        }
    }

    /// Sets whether the timestamp is reported.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets whether timestamps are rendered in UTC.
    #[must_use]
    pub const fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Sets whether the level is reported.
    #[must_use]
    pub const fn with_level(mut self, level: bool) -> Self {
        self.level = level;
        self
    }

    /// Sets whether the call site is reported.
    #[must_use]
    pub const fn with_caller(mut self, caller: bool) -> Self {
        self.caller = caller;
        self
    }

    /// Sets whether the calling function name is appended to the call site.
    #[must_use]
    pub const fn with_function(mut self, function: bool) -> Self {
        self.function = function;
        self
    }

    /// Sets the number of frames skipped above the tracked call site.
    #[must_use]
    pub const fn with_caller_skip(mut self, caller_skip: usize) -> Self {
        self.caller_skip = caller_skip;
        self
    }

    /// Sets the levels that are emitted.
    #[must_use]
    pub const fn with_levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }
}

impl Default for Config {
    /// Reports timestamp (local time), level and caller for every level,
    /// with no extra skip and no function name.
    fn default() -> Self {
        Self {
            timestamp: true,
            utc: false,
            level: true,
            caller: true,
            function: false,
            caller_skip: 0,
            levels: Levels::ALL,
        }
    }
}
