//! GELF message and the fluent event builder
//!
//! An event is an owned value: every builder call consumes it and hands it
//! back, and [`LogEvent::message`] consumes it for good when sending.

use super::{error::Result, log_level::LogLevel, outcome::Outcome, sender::Delivery};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GELF specification version written to every message
pub const GELF_VERSION: &str = "1.1";

/// Wire representation of one event
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GelfMessage {
    pub version: String,
    pub host: String,
    pub short_message: String,
    pub full_message: String,
    /// Seconds since the Unix epoch, taken when the event was created
    pub timestamp: i64,
    pub level: LogLevel,
    #[serde(rename = "_app")]
    pub app: String,
    pub component: String,
    pub params: BTreeMap<String, String>,
}

impl GelfMessage {
    /// Empty message stamped with the current time
    pub fn new(host: String, app: String, component: String) -> Self {
        Self {
            host,
            app,
            component,
            timestamp: chrono::Utc::now().timestamp(),
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for GelfMessage {
    fn default() -> Self {
        Self {
            version: GELF_VERSION.to_string(),
            host: String::new(),
            short_message: String::new(),
            full_message: String::new(),
            timestamp: 0,
            level: LogLevel::default(),
            app: String::new(),
            component: String::new(),
            params: BTreeMap::new(),
        }
    }
}

/// One log event under construction
///
/// Created by [`EmitterConfig::new_event`](crate::EmitterConfig::new_event).
/// Nothing leaves the process until [`message`](LogEvent::message) is called.
///
/// # Example
///
/// ```no_run
/// use gelf_emitter::prelude::*;
///
/// let config = EmitterConfig::new()
///     .with_endpoint("127.0.0.1", 12201)
///     .with_transport(Transport::Udp);
///
/// let outcome = config
///     .new_event()
///     .warn()
///     .full_message("disk usage above 90% on /var")
///     .add_param("mount", "/var")
///     .message("disk almost full");
///
/// if let Some(err) = outcome.error() {
///     eprintln!("log not delivered: {}", err);
/// }
/// ```
#[must_use = "an event is only sent by calling `message`"]
pub struct LogEvent {
    gelf: GelfMessage,
    delivery: Delivery,
}

impl LogEvent {
    pub(crate) fn new(gelf: GelfMessage, delivery: Delivery) -> Self {
        Self { gelf, delivery }
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.gelf.level = level;
        self
    }

    pub fn debug(self) -> Self {
        self.level(LogLevel::Debug)
    }

    pub fn info(self) -> Self {
        self.level(LogLevel::Info)
    }

    pub fn warn(self) -> Self {
        self.level(LogLevel::Warn)
    }

    pub fn error(self) -> Self {
        self.level(LogLevel::Error)
    }

    pub fn fatal(self) -> Self {
        self.level(LogLevel::Fatal)
    }

    /// Selects the panic severity. Does not panic.
    pub fn panic(self) -> Self {
        self.level(LogLevel::Panic)
    }

    /// Set the optional extended text
    pub fn full_message(mut self, text: impl Into<String>) -> Self {
        self.gelf.full_message = text.into();
        self
    }

    /// Add an annotation. A repeated key keeps the last value.
    pub fn add_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.gelf.params.insert(key.into(), value.into());
        self
    }

    /// The message as it would be serialized now
    pub fn gelf(&self) -> &GelfMessage {
        &self.gelf
    }

    pub fn to_json(&self) -> Result<String> {
        self.gelf.to_json()
    }

    /// Set the short message and send the event.
    ///
    /// Failures never surface as a `Result`: by the time the outcome is
    /// returned they have gone to the fallback file, the error handler, or
    /// standard output.
    pub fn message(mut self, text: impl Into<String>) -> Outcome {
        self.gelf.short_message = text.into();
        self.delivery.send(&self.gelf)
    }
}
