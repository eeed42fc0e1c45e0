//! Result of sending one event

use super::error::EmitterError;
use std::fmt;

/// How a send was resolved
///
/// A `Reported` error has already been passed to the error handler, or
/// printed to standard output when no handler is installed, by the time the
/// caller sees it.
#[derive(Debug)]
pub enum Outcome {
    /// Payload written to the collector
    Delivered,
    /// Collector unreachable; payload appended to the fallback file
    FallbackWritten,
    /// Send abandoned; the error went to the handler or console
    Reported(EmitterError),
}

impl Outcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::FallbackWritten)
    }

    pub fn error(&self) -> Option<&EmitterError> {
        match self {
            Outcome::Reported(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_error(self) -> Option<EmitterError> {
        match self {
            Outcome::Reported(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Delivered => f.write_str("delivered"),
            Outcome::FallbackWritten => f.write_str("written to fallback file"),
            Outcome::Reported(err) => write!(f, "reported: {}", err),
        }
    }
}
