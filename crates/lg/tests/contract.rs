//! Integration tests for the `Log` contract as seen by adapter authors.
//!
//! A minimal in-memory adapter is implemented here the way an external crate
//! would, then driven through `Arc<dyn Log>`, the capability probe and the
//! formatting macros.

use std::fmt::Arguments;
use std::io;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use lg::{
    BoxError, CallerSkip, Closer, Fields, Level, Log, LogExt, Value, add_caller_skip, lg_debug,
    lg_error, lg_warn,
};

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    level: Level,
    message: String,
    fields: Fields,
    line: u32,
    skip: usize,
}

#[derive(Clone, Default)]
struct MemoryLog {
    entries: Arc<Mutex<Vec<Entry>>>,
    fields: Fields,
    skip: usize,
}

impl MemoryLog {
    fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Log for MemoryLog {
    #[track_caller]
    fn log(&self, level: Level, args: Arguments<'_>) {
        let line = Location::caller().line();
        self.entries.lock().unwrap().push(Entry {
            level,
            message: args.to_string(),
            fields: self.fields.clone(),
            line,
            skip: self.skip,
        });
    }

    fn with(&self, key: &str, value: Value) -> Arc<dyn Log> {
        Arc::new(Self {
            entries: Arc::clone(&self.entries),
            fields: self.fields.with(key, value),
            skip: self.skip,
        })
    }

    fn as_caller_skip(&self) -> Option<&dyn CallerSkip> {
        Some(self)
    }
}

impl CallerSkip for MemoryLog {
    fn add_caller_skip(&self, skip: usize) -> Arc<dyn Log> {
        Arc::new(Self {
            entries: Arc::clone(&self.entries),
            fields: self.fields.clone(),
            skip: self.skip + skip,
        })
    }
}

struct ErrCloser;

impl Closer for ErrCloser {
    fn close(&mut self) -> io::Result<()> {
        Err(io::Error::other("error: WarnIfCloseError msg"))
    }
}

/// Executes all the methods of `Log`.
fn log_it_all(log: &dyn Log) {
    log.debug(&[&"Debug msg"]);
    log.debugf(format_args!("Debugf msg"));
    log.warn(&[&"Warn msg"]);
    log.warnf(format_args!("Warnf msg"));
    log.error(&[&"Error msg"]);
    log.errorf(format_args!("Errorf msg"));

    log.warn_if_error(None);
    log.warn_if_error(Some(&io::Error::other("WarnIfError msg")));

    log.warn_if_func_error(None);
    log.warn_if_func_error(Some(&mut || -> Result<(), BoxError> { Ok(()) }));
    log.warn_if_func_error(Some(&mut || -> Result<(), BoxError> {
        Err("error: WarnIfFuncError msg".into())
    }));

    log.warn_if_close_error(None);
    log.warn_if_close_error(Some(&mut ErrCloser));
}

// ============================================================================
// Leveled output
// ============================================================================

#[test]
fn log_it_all_emits_one_entry_per_emitting_call() {
    let memory = MemoryLog::default();
    log_it_all(&memory);

    let got: Vec<_> = memory
        .entries()
        .into_iter()
        .map(|e| (e.level, e.message))
        .collect();
    let want = [
        (Level::Debug, "Debug msg"),
        (Level::Debug, "Debugf msg"),
        (Level::Warn, "Warn msg"),
        (Level::Warn, "Warnf msg"),
        (Level::Error, "Error msg"),
        (Level::Error, "Errorf msg"),
        (Level::Warn, "WarnIfError msg"),
        (Level::Warn, "error: WarnIfFuncError msg"),
        (Level::Warn, "error: WarnIfCloseError msg"),
    ];

    assert_eq!(got.len(), want.len());
    for ((level, message), (want_level, want_message)) in got.iter().zip(want) {
        assert_eq!(*level, want_level);
        assert_eq!(message, want_message);
    }
}

#[test]
fn absent_inputs_emit_nothing() {
    let memory = MemoryLog::default();
    memory.warn_if_error(None);
    memory.warn_if_func_error(None);
    memory.warn_if_close_error(None);
    assert!(memory.entries().is_empty());
}

// ============================================================================
// Caller attribution
// ============================================================================

#[test]
fn macros_report_their_invocation_line() {
    let memory = MemoryLog::default();
    let log: Arc<dyn Log> = Arc::new(memory.clone());

    let first = line!() + 1;
    lg_debug!(log, "loaded {} entries", 3);
    let second = line!() + 1;
    lg_warn!(memory, "slow {}", "disk");
    let third = line!() + 1;
    lg_error!(log, "failed");

    let entries = memory.entries();
    assert_eq!(entries[0].message, "loaded 3 entries");
    assert_eq!(entries[0].line, first);
    assert_eq!(entries[1].line, second);
    assert_eq!(entries[2].line, third);
}

#[test]
fn arc_dyn_log_preserves_call_site() {
    let memory = MemoryLog::default();
    let log: Arc<dyn Log> = Arc::new(memory.clone());

    let expected = line!() + 1;
    log.warn_if_error(Some(&io::Error::other("gremlins")));

    assert_eq!(memory.entries()[0].line, expected);
}

// ============================================================================
// Derived instances
// ============================================================================

#[test]
fn with_derives_without_mutating_receiver() {
    let memory = MemoryLog::default();
    let base: Arc<dyn Log> = Arc::new(memory.clone());

    let derived = base.with("k1", Value::from(1)).with("k1", Value::from(2));
    let other = derived.with_field("k2", "two");

    base.warn(&[&"base"]);
    derived.warn(&[&"derived"]);
    other.warn(&[&"other"]);

    let entries = memory.entries();
    assert!(entries[0].fields.is_empty());
    assert_eq!(entries[1].fields.len(), 1);
    assert_eq!(entries[1].fields.get("k1"), Some(&Value::from(2)));
    assert_eq!(entries[2].fields.keys().collect::<Vec<_>>(), ["k1", "k2"]);
}

#[test]
fn add_caller_skip_uses_capability_when_present() {
    let memory = MemoryLog::default();
    let log: Arc<dyn Log> = Arc::new(memory.clone());

    let skipped = add_caller_skip(&add_caller_skip(&log, 1), 2);
    skipped.warn(&[&"skipped"]);

    assert_eq!(memory.entries()[0].skip, 3);
}

#[test]
fn add_caller_skip_falls_back_to_same_instance() {
    let log = lg::discard();
    let skipped = add_caller_skip(&log, 5);
    assert!(Arc::ptr_eq(&log, &skipped));
}
