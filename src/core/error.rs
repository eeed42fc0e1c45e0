//! Error types for the GELF emitter

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, EmitterError>;

#[derive(Debug, thiserror::Error)]
pub enum EmitterError {
    /// Transport is neither TCP nor UDP
    #[error("Protocol is not defined")]
    ProtocolUndefined,

    /// Collector address is empty
    #[error("IP address is not defined")]
    AddressUndefined,

    /// Collector port is zero
    #[error("Port is not defined")]
    PortUndefined,

    /// Event could not be encoded as GELF JSON
    #[error("Could not marshal log message: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    /// Dialing the collector failed
    #[error("Could not connect graylog server at {endpoint}: {source}")]
    ConnectFailed {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the payload to an open connection failed
    #[error("Could not send log message to {endpoint}: {source}")]
    WriteFailed {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    /// The local fallback file could not be opened or written
    #[error("Fallback file error for '{}': {source}", path.display())]
    FallbackWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict transport parsing rejected the name
    #[error("Invalid transport: '{0}'")]
    InvalidTransport(String),
}

impl EmitterError {
    /// Create a connect error for the given endpoint
    pub fn connect(endpoint: impl Into<String>, source: std::io::Error) -> Self {
        EmitterError::ConnectFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a write error for the given endpoint
    pub fn write(endpoint: impl Into<String>, source: std::io::Error) -> Self {
        EmitterError::WriteFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a fallback file error
    pub fn fallback(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmitterError::FallbackWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Transient failure talking to the collector; the only errors eligible
    /// for the fallback file
    pub fn is_delivery(&self) -> bool {
        matches!(
            self,
            EmitterError::ConnectFailed { .. } | EmitterError::WriteFailed { .. }
        )
    }
}
