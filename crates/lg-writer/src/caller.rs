//! crates/lg-writer/src/caller.rs
//! Resolution and rendering of the reported call site.

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Source location reported for an entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Caller {
    file: String,
    line: u32,
    function: Option<String>,
}

impl Caller {
    /// Creates a caller from a file path and line number.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            function: None,
        }
    }

    /// Attaches the name of the function containing the call site.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Resolves the caller for an entry logged at `location`.
    ///
    /// With `skip == 0` this is `location` itself. Otherwise the stack is
    /// walked to the frame containing `location` and the site `skip` frames
    /// further out is reported. With `function` set the walk also names the
    /// function containing the reported site.
    ///
    /// The walk matches frames by file and line, which needs debug info.
    /// When no frame matches, `location` is reported unchanged and unnamed.
    #[must_use]
    pub fn resolve(location: &Location<'_>, skip: usize, function: bool) -> Self {
        if skip > 0 || function {
            if let Some(mut found) = walk_out(location, skip) {
                if !function {
                    found.function = None;
                }
                return found;
            }
        }
        Self::new(location.file(), location.line())
    }

    /// Full path as recorded by the compiler or the debug info.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Name of the function containing the call site, when resolved.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Renders `dir/file.rs:line`, keeping only the final directory, with
    /// `:function` appended when known.
    #[must_use]
    pub fn trimmed(&self) -> String {
        let path = normalize(&self.file);
        let mut parts = path.rsplitn(3, '/');
        let name = parts.next().unwrap_or_default();
        let site = match parts.next() {
            Some(dir) => format!("{dir}/{name}:{}", self.line),
            None => format!("{name}:{}", self.line),
        };
        self.append_function(site)
    }

    /// Renders `file.rs:line`, with `:function` appended when known.
    #[must_use]
    pub fn short(&self) -> String {
        let path = normalize(&self.file);
        let name = path.rsplit('/').next().unwrap_or_default();
        self.append_function(format!("{name}:{}", self.line))
    }

    fn append_function(&self, mut site: String) -> String {
        if let Some(function) = &self.function {
            site.push(':');
            site.push_str(function);
        }
        site
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(function) = &self.function {
            write!(f, ":{function}")?;
        }
        Ok(())
    }
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Last path segment of a demangled symbol, skipping closure and shim markers.
fn function_name(symbol: &str) -> Option<String> {
    symbol
        .rsplit("::")
        .find(|segment| !segment.is_empty() && !segment.starts_with("{{"))
        .map(str::to_owned)
}

/// Walks the stack outward from the frame that made the call at `location`.
///
/// Inlined frames are reported by the symbolizer as separate symbols, so the
/// count is in logical frames. With `skip == 0` the matching frame itself is
/// returned.
fn walk_out(location: &Location<'_>, skip: usize) -> Option<Caller> {
    let target = Path::new(location.file());
    let mut remaining: Option<usize> = None;
    let mut found: Option<Caller> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            let here = || Caller {
                file: file.to_string_lossy().into_owned(),
                line,
                function: symbol
                    .name()
                    .and_then(|name| function_name(&format!("{name:#}"))),
            };
            match remaining {
                None if line == location.line() && file.ends_with(target) => {
                    if skip == 0 {
                        found = Some(here());
                    } else {
                        remaining = Some(skip);
                    }
                }
                None => {}
                Some(n) if n <= 1 => found = Some(here()),
                Some(n) => remaining = Some(n - 1),
            }
        });
        found.is_none()
    });

    found
}
