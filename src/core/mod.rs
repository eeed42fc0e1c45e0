//! Core emitter types

pub mod config;
pub mod error;
pub mod event;
pub mod log_level;
pub mod metrics;
pub mod outcome;
pub mod sender;
pub mod transport;

pub use config::{EmitterConfig, ErrorHandler, SharedEmitter};
pub use error::{EmitterError, Result};
pub use event::{GelfMessage, LogEvent, GELF_VERSION};
pub use log_level::LogLevel;
pub use metrics::EmitterMetrics;
pub use outcome::Outcome;
pub use transport::{Connection, Transport};
