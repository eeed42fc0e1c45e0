//! Logging macros for formatted one-line events.
//!
//! Each macro creates an event from the given emitter (an
//! [`EmitterConfig`](crate::EmitterConfig) or a
//! [`SharedEmitter`](crate::SharedEmitter)), selects the severity, formats
//! the short message like `format!` and sends it. The [`Outcome`](crate::Outcome)
//! is returned.
//!
//! # Examples
//!
//! ```no_run
//! use gelf_emitter::prelude::*;
//! use gelf_emitter::gelf_info;
//!
//! let config = EmitterConfig::new()
//!     .with_endpoint("127.0.0.1", 12201)
//!     .with_transport(Transport::Udp);
//!
//! let port = 8080;
//! gelf_info!(config, "Server listening on port {}", port);
//! ```

/// Send a formatted event at the given level.
///
/// ```no_run
/// # use gelf_emitter::prelude::*;
/// # let config = EmitterConfig::new();
/// use gelf_emitter::gelf_log;
/// gelf_log!(config, LogLevel::Info, "Simple message");
/// gelf_log!(config, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! gelf_log {
    ($emitter:expr, $level:expr, $($arg:tt)+) => {
        $emitter.new_event().level($level).message(format!($($arg)+))
    };
}

#[macro_export]
macro_rules! gelf_debug {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::gelf_log!($emitter, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! gelf_info {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::gelf_log!($emitter, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! gelf_warn {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::gelf_log!($emitter, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! gelf_error {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::gelf_log!($emitter, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! gelf_fatal {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::gelf_log!($emitter, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Send a formatted event at the panic severity. The calling thread does not panic.
#[macro_export]
macro_rules! gelf_panic {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::gelf_log!($emitter, $crate::LogLevel::Panic, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EmitterConfig, GelfMessage, LogLevel, SharedEmitter, Transport};
    use std::net::UdpSocket;

    fn collector() -> (UdpSocket, EmitterConfig) {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let port = socket.local_addr().unwrap().port();
        let config = EmitterConfig::new()
            .with_endpoint("127.0.0.1", port)
            .with_transport(Transport::Udp);
        (socket, config)
    }

    fn receive(socket: &UdpSocket) -> GelfMessage {
        let mut buf = [0u8; 4096];
        let n = socket.recv(&mut buf).unwrap();
        serde_json::from_slice(&buf[..n]).unwrap()
    }

    #[test]
    fn test_gelf_log_macro() {
        let (socket, config) = collector();
        assert!(gelf_log!(config, LogLevel::Warn, "Formatted: {}", 42).is_delivered());

        let gelf = receive(&socket);
        assert_eq!(gelf.level, LogLevel::Warn);
        assert_eq!(gelf.short_message, "Formatted: 42");
    }

    #[test]
    fn test_level_macros() {
        let (socket, config) = collector();

        gelf_debug!(config, "d");
        gelf_info!(config, "i {}", 1);
        gelf_warn!(config, "w");
        gelf_error!(config, "e");
        gelf_fatal!(config, "f");
        gelf_panic!(config, "p");

        let levels: Vec<LogLevel> = (0..6).map(|_| receive(&socket).level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_macros_accept_shared_emitter() {
        let (socket, config) = collector();
        let shared = SharedEmitter::new(config);

        gelf_info!(shared, "from shared");
        assert_eq!(receive(&socket).short_message, "from shared");
    }
}
