//! Helpers shared by the cross-adapter tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use lg_suite::{BoxError, Closer, Log};

/// In-memory sink readable after the log has written to it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("log output is utf-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct ErrCloser;

impl Closer for ErrCloser {
    fn close(&mut self) -> io::Result<()> {
        Err(io::Error::other("error: WarnIfCloseError msg"))
    }
}

/// Level token and message expected from each emitting call of [`log_it_all`].
pub const EXPECTED: [(&str, &str); 9] = [
    ("DEBUG", "Debug msg"),
    ("DEBUG", "Debugf msg"),
    ("WARN", "Warn msg"),
    ("WARN", "Warnf msg"),
    ("ERROR", "Error msg"),
    ("ERROR", "Errorf msg"),
    ("WARN", "WarnIfError msg"),
    ("WARN", "error: WarnIfFuncError msg"),
    ("WARN", "error: WarnIfCloseError msg"),
];

/// Executes every method of [`Log`].
pub fn log_it_all(log: &dyn Log) {
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
