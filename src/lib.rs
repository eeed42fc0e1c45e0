//! # GELF Emitter
//!
//! A small client that formats log events as GELF (Graylog Extended Log
//! Format) JSON and sends them to a collector over TCP or UDP, with an
//! optional local file fallback when the collector cannot be reached.
//!
//! ## Features
//!
//! - **Fluent events**: severity, extended text and key/value params, sent by `message`
//! - **Snapshot configuration**: events copy the settings they were created with
//! - **Best-effort delivery**: one connection per event, no retries
//! - **Pluggable reporting**: error handler callback, console output, or fallback file
//!
//! ```no_run
//! use gelf_emitter::prelude::*;
//!
//! let mut config = EmitterConfig::new();
//! config.set_endpoint_address("172.22.29.1");
//! config.set_endpoint_port(12201);
//! config.set_transport("tcp");
//! config.set_app_name("checkout");
//! config.set_fallback_to_file(true);
//! config.set_error_handler(|err| eprintln!("gelf: {}", err));
//!
//! config.new_event().info().message("service started");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleReporter, FallbackFile};
    pub use crate::core::{
        EmitterConfig, EmitterError, EmitterMetrics, ErrorHandler, GelfMessage, LogEvent,
        LogLevel, Outcome, Result, SharedEmitter, Transport, GELF_VERSION,
    };
}

pub use appenders::{ConsoleReporter, FallbackFile, DEFAULT_FALLBACK_PATH};
pub use core::{
    EmitterConfig, EmitterError, EmitterMetrics, ErrorHandler, GelfMessage, LogEvent, LogLevel,
    Outcome, Result, SharedEmitter, Transport, GELF_VERSION,
};
