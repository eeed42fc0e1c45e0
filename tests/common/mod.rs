//! Helpers shared by the integration test binaries

use std::net::TcpListener;

/// Loopback TCP port with no listener.
///
/// The port is released before it is returned, so another process can
/// claim it in between. The window is small and tests accept it: a claimed
/// port would turn an expected fallback into a delivery.
pub fn closed_tcp_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("No local addr").port()
}
