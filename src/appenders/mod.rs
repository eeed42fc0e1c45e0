//! Output destinations other than the collector

pub mod console;
pub mod fallback_file;

pub use console::ConsoleReporter;
pub use fallback_file::{FallbackFile, DEFAULT_FALLBACK_PATH};
