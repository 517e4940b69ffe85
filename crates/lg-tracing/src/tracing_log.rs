//! crates/lg-tracing/src/tracing_log.rs
//! Adapter that forwards entries as `tracing` events.

use std::fmt::Arguments;
use std::panic::Location;
use std::sync::Arc;

use lg::{Fields, Level, Log, Value};

/// Event target used for every forwarded entry.
pub const TARGET: &str = "lg";

/// A [`Log`] that emits `tracing` events at the matching level.
#[derive(Clone, Debug)]
pub struct TracingLog {
    fields: Fields,
    caller: bool,
}

impl TracingLog {
    /// Forwards entries with the call site attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Fields::new(),
            caller: true,
        }
    }

    /// Sets whether the call site is attached as the `caller` field.
    #[must_use]
    pub fn with_caller(mut self, caller: bool) -> Self {
        self.caller = caller;
        self
    }

    /// Fields attached to every event.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl Default for TracingLog {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! forward {
    ($level:expr, $caller:expr, $fields:expr, $args:expr) => {
        tracing::event!(
            target: TARGET,
            $level,
            caller = $caller,
            fields = $fields,
            "{}",
            $args
        )
    };
}

impl Log for TracingLog {
    #[track_caller]
    fn log(&self, level: Level, args: Arguments<'_>) {
        let location = Location::caller();
        let caller = self
            .caller
            .then(|| format!("{}:{}", location.file(), location.line()));
        let fields = (!self.fields.is_empty()).then(|| self.fields.to_string());
        let (caller, fields) = (caller.as_deref(), fields.as_deref());

        match level {
            Level::Debug => forward!(tracing::Level::DEBUG, caller, fields, args),
            Level::Warn => forward!(tracing::Level::WARN, caller, fields, args),
            Level::Error => forward!(tracing::Level::ERROR, caller, fields, args),
        }
    }

    fn with(&self, key: &str, value: Value) -> Arc<dyn Log> {
        Arc::new(Self {
            fields: self.fields.with(key, value),
            caller: self.caller,
        })
    }
}
