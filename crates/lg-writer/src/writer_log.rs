//! crates/lg-writer/src/writer_log.rs
//! The writer-backed [`Log`] adapter.

use std::fmt::Arguments;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

use lg::{CallerSkip, Fields, Level, Log, Value};

use crate::caller::Caller;
use crate::config::Config;
use crate::encoder::{Encoder, Entry};
use crate::format::{ConfigError, Format};
use crate::sink::Sink;

/// A [`Log`] that encodes each entry as one line and writes it to a sink.
///
/// Instances derived through [`Log::with`] or [`CallerSkip::add_caller_skip`]
/// share the sink and the encoder with the instance they came from; only the
/// field set and the skip count are copied.
#[derive(Clone, Debug)]
pub struct WriterLog {
    sink: Sink,
    encoder: Encoder,
    fields: Fields,
    caller_skip: usize,
}

impl WriterLog {
    /// Text output to stdout with timestamp, level and caller.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Sink::stdout(), Format::Text, Config::default())
    }

    /// Writes `format`-encoded lines to `sink`.
    #[must_use]
    pub fn with_config<W>(sink: W, format: Format, config: Config) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_parts(Sink::new(sink), format, config)
    }

    /// Like [`with_config`](Self::with_config), with the format given by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFormat`] when `format` is not `text`,
    /// `json` or `testing`.
    pub fn from_format_name<W>(sink: W, format: &str, config: Config) -> Result<Self, ConfigError>
    where
        W: Write + Send + 'static,
    {
        let format = format.parse::<Format>()?;
        Ok(Self::with_config(sink, format, config))
    }

    /// Testing-format output with a UTC timestamp, level and caller and no
    /// skip.
    #[must_use]
    pub fn testing<W>(sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_config(sink, Format::Testing, Config::default().with_utc(true))
    }

    fn from_parts(sink: Sink, format: Format, config: Config) -> Self {
        Self {
            sink,
            encoder: Encoder::new(format, config),
            fields: Fields::new(),
            caller_skip: config.caller_skip,
        }
    }

    /// The output format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.encoder.format()
    }

    /// The configuration snapshot this instance was built with.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.encoder.config()
    }

    /// Fields attached to every entry.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Frames skipped above the tracked call site, including the configured base.
    #[must_use]
    pub const fn caller_skip(&self) -> usize {
        self.caller_skip
    }

    fn skipped(&self, skip: usize) -> Self {
        Self {
            caller_skip: self.caller_skip.saturating_add(skip),
            ..self.clone()
        }
    }

    fn emit(&self, level: Level, message: &str, location: &Location<'_>) {
        let config = self.encoder.config();
        let caller = config
            .caller
            .then(|| Caller::resolve(location, self.caller_skip, config.function));
        let entry = Entry {
            time: self.encoder.now(),
            level,
            caller,
            message,
            fields: &self.fields,
        };

        let mut line = Vec::with_capacity(128);
        if self.encoder.encode(&entry, &mut line).is_ok() {
            self.sink.write_line(&line);
        }
    }
}

impl Default for WriterLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for WriterLog {
    #[track_caller]
    fn log(&self, level: Level, args: Arguments<'_>) {
        if !self.encoder.config().levels.contains(level) {
            return;
        }
        let location = Location::caller();
        match args.as_str() {
            Some(message) => self.emit(level, message, location),
            None => self.emit(level, &args.to_string(), location),
        }
    }

    fn with(&self, key: &str, value: Value) -> Arc<dyn Log> {
        Arc::new(Self {
            sink: self.sink.clone(),
            encoder: self.encoder,
            fields: self.fields.with(key, value),
            caller_skip: self.caller_skip,
        })
    }

    fn as_caller_skip(&self) -> Option<&dyn CallerSkip> {
        Some(self)
    }
}

impl CallerSkip for WriterLog {
    fn add_caller_skip(&self, skip: usize) -> Arc<dyn Log> {
        Arc::new(self.skipped(skip))
    }
}
