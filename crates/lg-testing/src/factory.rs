//! crates/lg-testing/src/factory.rs
//! Construction of the backend wrapped by a [`TestLog`](crate::TestLog).

use std::sync::Arc;

use lg::Log;
use lg_writer::{Config, Format, WriterLog};

use crate::buffer::CaptureBuffer;

/// Builds a backend writing into the given buffer.
pub type Factory = Arc<dyn Fn(CaptureBuffer) -> Arc<dyn Log> + Send + Sync>;

/// Testing-format [`WriterLog`] with UTC timestamp, level and caller.
#[must_use]
pub fn testing_factory() -> Factory {
    Arc::new(|buffer: CaptureBuffer| -> Arc<dyn Log> { Arc::new(WriterLog::testing(buffer)) })
}

/// [`WriterLog`] backend with an explicit format and configuration.
#[must_use]
pub fn writer_factory(format: Format, config: Config) -> Factory {
    Arc::new(move |buffer: CaptureBuffer| -> Arc<dyn Log> {
        Arc::new(WriterLog::with_config(buffer, format, config))
    })
}
