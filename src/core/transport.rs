//! Transport selection and the one-shot collector connection

use super::error::{EmitterError, Result};
use std::fmt;
use std::io::{self, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};
use std::str::FromStr;

/// Transport used to reach the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transport {
    Tcp,
    Udp,
    /// No usable transport configured; sends fail with `ProtocolUndefined`
    #[default]
    Unset,
}

impl Transport {
    /// Lenient conversion: anything other than `tcp` or `udp` is `Unset`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Transport::Unset)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Tcp => "tcp",
            Transport::Udp => "udp",
            Transport::Unset => "",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Transport::Unset)
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = EmitterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tcp" => Ok(Transport::Tcp),
            "udp" => Ok(Transport::Udp),
            other => Err(EmitterError::InvalidTransport(other.to_string())),
        }
    }
}

impl From<&str> for Transport {
    fn from(name: &str) -> Self {
        Transport::from_name(name)
    }
}

/// Render `address:port`, bracketing bare IPv6 literals
pub fn endpoint_label(address: &str, port: u16) -> String {
    if address.contains(':') && !address.starts_with('[') {
        format!("[{}]:{}", address, port)
    } else {
        format!("{}:{}", address, port)
    }
}

/// An open connection to the collector, used for exactly one payload.
///
/// Dropping the value closes the socket.
pub enum Connection {
    Tcp(TcpStream),
    Udp(UdpSocket),
}

impl Connection {
    /// Dial the collector. No connect timeout is applied.
    pub fn open(transport: Transport, address: &str, port: u16) -> io::Result<Self> {
        match transport {
            Transport::Tcp => TcpStream::connect((address, port)).map(Connection::Tcp),
            Transport::Udp => {
                let target = resolve(address, port)?;
                let local: SocketAddr = if target.is_ipv4() {
                    ([0, 0, 0, 0], 0).into()
                } else {
                    (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
                };
                let socket = UdpSocket::bind(local)?;
                socket.connect(target)?;
                Ok(Connection::Udp(socket))
            }
            Transport::Unset => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no transport selected",
            )),
        }
    }

    /// Write the whole payload. UDP sends it as a single datagram.
    pub fn write_all(&mut self, payload: &[u8]) -> io::Result<()> {
        match self {
            Connection::Tcp(stream) => {
                stream.write_all(payload)?;
                stream.flush()
            }
            Connection::Udp(socket) => {
                let sent = socket.send(payload)?;
                if sent != payload.len() {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        format!("datagram truncated: {} of {} bytes sent", sent, payload.len()),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn resolve(address: &str, port: u16) -> io::Result<SocketAddr> {
    (address, port).to_socket_addrs()?.next().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("no addresses resolved for {}", endpoint_label(address, port)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;

    #[test]
    fn test_transport_parsing() {
        assert_eq!("tcp".parse::<Transport>().unwrap(), Transport::Tcp);
        assert_eq!("udp".parse::<Transport>().unwrap(), Transport::Udp);
        assert!(matches!(
            "TCP".parse::<Transport>(),
            Err(EmitterError::InvalidTransport(_))
        ));

        assert_eq!(Transport::from_name("udp"), Transport::Udp);
        assert_eq!(Transport::from_name("http"), Transport::Unset);
        assert_eq!(Transport::from(""), Transport::Unset);
        assert!(!Transport::default().is_set());
    }

    #[test]
    fn test_endpoint_label() {
        assert_eq!(endpoint_label("127.0.0.1", 12201), "127.0.0.1:12201");
        assert_eq!(endpoint_label("::1", 12201), "[::1]:12201");
        assert_eq!(endpoint_label("graylog.local", 9000), "graylog.local:9000");
    }

    #[test]
    fn test_tcp_connection_writes_payload() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let mut conn = Connection::open(Transport::Tcp, "127.0.0.1", port).unwrap();
        conn.write_all(b"{\"a\":1}").unwrap();
        drop(conn);

        let (mut stream, _) = listener.accept().unwrap();
        let mut received = String::new();
        stream.read_to_string(&mut received).unwrap();
        assert_eq!(received, "{\"a\":1}");
    }

    #[test]
    fn test_udp_connection_sends_datagram() {
        let collector = UdpSocket::bind("127.0.0.1:0").unwrap();
        let port = collector.local_addr().unwrap().port();

        let mut conn = Connection::open(Transport::Udp, "127.0.0.1", port).unwrap();
        conn.write_all(b"hello").unwrap();

        let mut buf = [0u8; 64];
        let n = collector.recv(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"hello");
    }

    #[test]
    fn test_unset_transport_cannot_open() {
        assert!(Connection::open(Transport::Unset, "127.0.0.1", 1).is_err());
    }
}
