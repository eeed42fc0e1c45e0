//! Send pipeline for a finalized event
//!
//! Validation happens in a fixed order and stops at the first failure:
//! transport, address, port, then serialization. Only connect and write
//! failures are eligible for the fallback file.

use super::{
    config::ErrorHandler,
    error::{EmitterError, Result},
    event::GelfMessage,
    metrics::EmitterMetrics,
    outcome::Outcome,
    transport::{endpoint_label, Connection, Transport},
};
use crate::appenders::{ConsoleReporter, FallbackFile};
use std::sync::Arc;

/// Transport settings copied into an event when it is created
#[derive(Clone)]
pub(crate) struct Delivery {
    pub(crate) address: String,
    pub(crate) port: u16,
    pub(crate) transport: Transport,
    pub(crate) error_handler: Option<ErrorHandler>,
    pub(crate) fallback_to_file: bool,
    pub(crate) fallback: FallbackFile,
    pub(crate) metrics: Arc<EmitterMetrics>,
}

impl Delivery {
    /// Run the pipeline once and record the outcome.
    ///
    /// Blocks for the duration of the connect and write; no timeouts apply.
    pub(crate) fn send(&self, message: &GelfMessage) -> Outcome {
        let outcome = self.dispatch(message);
        self.metrics.record(&outcome);
        outcome
    }

    fn dispatch(&self, message: &GelfMessage) -> Outcome {
        if let Err(err) = self.validate() {
            return self.report(err);
        }

        let payload = match serde_json::to_vec(message) {
            Ok(payload) => payload,
            Err(err) => return self.report(err.into()),
        };

        match self.transmit(&payload) {
            Ok(()) => Outcome::Delivered,
            Err(err) if self.fallback_to_file && err.is_delivery() => self.write_fallback(&payload),
            Err(err) => self.report(err),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.transport.is_set() {
            return Err(EmitterError::ProtocolUndefined);
        }
        if self.address.is_empty() {
            return Err(EmitterError::AddressUndefined);
        }
        if self.port == 0 {
            return Err(EmitterError::PortUndefined);
        }
        Ok(())
    }

    fn transmit(&self, payload: &[u8]) -> Result<()> {
        let endpoint = endpoint_label(&self.address, self.port);
        let mut connection = Connection::open(self.transport, &self.address, self.port)
            .map_err(|e| EmitterError::connect(&endpoint, e))?;

        // The connection is closed when it goes out of scope, whatever the write result.
        connection
            .write_all(payload)
            .map_err(|e| EmitterError::write(endpoint, e))
    }

    fn write_fallback(&self, payload: &[u8]) -> Outcome {
        match self.fallback.append(payload) {
            Ok(()) => Outcome::FallbackWritten,
            Err(err) => self.report(err),
        }
    }

    fn report(&self, err: EmitterError) -> Outcome {
        match &self.error_handler {
            Some(handler) => handler(&err),
            None => ConsoleReporter::default().report(&err),
        }
        Outcome::Reported(err)
    }
}
