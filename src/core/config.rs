//! Emitter configuration
//!
//! Holds the collector endpoint, transport, identity labels and failure
//! policy. Nothing is validated when set; the send pipeline checks the
//! endpoint when an event is finalized.

use super::{
    error::EmitterError,
    event::{GelfMessage, LogEvent},
    metrics::EmitterMetrics,
    sender::Delivery,
    transport::Transport,
};
use crate::appenders::{FallbackFile, DEFAULT_FALLBACK_PATH};
use parking_lot::RwLock;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Callback receiving send errors. Replaces console output when installed.
pub type ErrorHandler = Arc<dyn Fn(&EmitterError) + Send + Sync>;

/// Configuration shared by every event an application emits
///
/// # Example
///
/// ```no_run
/// use gelf_emitter::prelude::*;
///
/// let mut config = EmitterConfig::new();
/// config.set_endpoint_address("127.0.0.1");
/// config.set_endpoint_port(12201);
/// config.set_transport(Transport::Tcp);
/// config.set_app_name("billing");
///
/// config.new_event().info().add_param("order", "42").message("order placed");
/// ```
#[derive(Clone)]
pub struct EmitterConfig {
    endpoint_address: String,
    endpoint_port: u16,
    transport: Transport,
    app_name: String,
    component_name: String,
    host_name: String,
    error_handler: Option<ErrorHandler>,
    fallback_to_file: bool,
    fallback_path: PathBuf,
    /// Shared with every event, never copied
    metrics: Arc<EmitterMetrics>,
}

impl EmitterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint_address: String::new(),
            endpoint_port: 0,
            transport: Transport::Unset,
            app_name: String::new(),
            component_name: String::new(),
            host_name: String::new(),
            error_handler: None,
            fallback_to_file: false,
            fallback_path: PathBuf::from(DEFAULT_FALLBACK_PATH),
            metrics: Arc::new(EmitterMetrics::new()),
        }
    }

    pub fn set_endpoint_address(&mut self, address: impl Into<String>) {
        self.endpoint_address = address.into();
    }

    pub fn set_endpoint_port(&mut self, port: u16) {
        self.endpoint_port = port;
    }

    /// Accepts a [`Transport`] or a name; unknown names become `Unset`.
    pub fn set_transport(&mut self, transport: impl Into<Transport>) {
        self.transport = transport.into();
    }

    pub fn set_app_name(&mut self, name: impl Into<String>) {
        self.app_name = name.into();
    }

    pub fn set_component_name(&mut self, name: impl Into<String>) {
        self.component_name = name.into();
    }

    pub fn set_host_name(&mut self, name: impl Into<String>) {
        self.host_name = name.into();
    }

    pub fn set_fallback_to_file(&mut self, enabled: bool) {
        self.fallback_to_file = enabled;
    }

    /// Redirect the fallback file. Defaults to `logfile.log` in the working directory.
    pub fn set_fallback_path(&mut self, path: impl Into<PathBuf>) {
        self.fallback_path = path.into();
    }

    pub fn set_error_handler<F>(&mut self, handler: F)
    where
        F: Fn(&EmitterError) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
    }

    /// Remove the handler; errors print to standard output again.
    pub fn clear_error_handler(&mut self) {
        self.error_handler = None;
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_endpoint(mut self, address: impl Into<String>, port: u16) -> Self {
        self.set_endpoint_address(address);
        self.set_endpoint_port(port);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_transport(mut self, transport: impl Into<Transport>) -> Self {
        self.set_transport(transport);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.set_app_name(name);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.set_component_name(name);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_host_name(mut self, name: impl Into<String>) -> Self {
        self.set_host_name(name);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_fallback_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.set_fallback_to_file(true);
        self.set_fallback_path(path);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&EmitterError) + Send + Sync + 'static,
    {
        self.set_error_handler(handler);
        self
    }

    pub fn endpoint_address(&self) -> &str {
        &self.endpoint_address
    }

    pub fn endpoint_port(&self) -> u16 {
        self.endpoint_port
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn fallback_to_file(&self) -> bool {
        self.fallback_to_file
    }

    pub fn fallback_path(&self) -> &Path {
        &self.fallback_path
    }

    pub fn has_error_handler(&self) -> bool {
        self.error_handler.is_some()
    }

    /// Counters for every event created from this configuration
    pub fn metrics(&self) -> &Arc<EmitterMetrics> {
        &self.metrics
    }

    /// Start a new event from a snapshot of the current settings.
    ///
    /// Later changes to this configuration do not affect the returned event.
    pub fn new_event(&self) -> LogEvent {
        let gelf = GelfMessage::new(
            self.host_name.clone(),
            self.app_name.clone(),
            self.component_name.clone(),
        );

        let delivery = Delivery {
            address: self.endpoint_address.clone(),
            port: self.endpoint_port,
            transport: self.transport,
            error_handler: self.error_handler.clone(),
            fallback_to_file: self.fallback_to_file,
            fallback: FallbackFile::new(&self.fallback_path),
            metrics: Arc::clone(&self.metrics),
        };

        LogEvent::new(gelf, delivery)
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EmitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterConfig")
            .field("endpoint_address", &self.endpoint_address)
            .field("endpoint_port", &self.endpoint_port)
            .field("transport", &self.transport)
            .field("app_name", &self.app_name)
            .field("component_name", &self.component_name)
            .field("host_name", &self.host_name)
            .field("error_handler", &self.error_handler.is_some())
            .field("fallback_to_file", &self.fallback_to_file)
            .field("fallback_path", &self.fallback_path)
            .finish()
    }
}

/// Thread-safe handle to one process-wide configuration
///
/// Clones share the same configuration. Events are snapshotted under the
/// read lock, so a concurrent `update` is never observed half-applied.
#[derive(Clone, Default)]
pub struct SharedEmitter {
    inner: Arc<RwLock<EmitterConfig>>,
}

impl SharedEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Mutate the configuration under the write lock
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut EmitterConfig),
    {
        f(&mut *self.inner.write());
    }

    pub fn new_event(&self) -> LogEvent {
        self.inner.read().new_event()
    }

    /// Copy of the current configuration
    pub fn snapshot(&self) -> EmitterConfig {
        self.inner.read().clone()
    }

    pub fn metrics(&self) -> Arc<EmitterMetrics> {
        Arc::clone(self.inner.read().metrics())
    }
}

impl From<EmitterConfig> for SharedEmitter {
    fn from(config: EmitterConfig) -> Self {
        Self::new(config)
    }
}
