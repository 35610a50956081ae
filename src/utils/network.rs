//! Network utilities
//!
//! Port validation, server address resolution and socket setup.

use log::debug;
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::FtpClientError;

/// Whether `port` is a usable TCP port (1..=65535).
pub fn is_legal_port(port: i64) -> bool {
    (1..=65535).contains(&port)
}

/// Parses a port argument, rejecting anything outside the legal range.
pub fn parse_port(raw: &str) -> Option<u16> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|port| is_legal_port(*port))
        .map(|port| port as u16)
}

/// Resolves `host:port` to a socket address, preferring IPv4.
pub fn resolve_server_addr(host: &str, port: u16) -> Result<SocketAddr, FtpClientError> {
    let candidates: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|_| FtpClientError::InvalidHost(host.to_string()))?
        .collect();

    let addr = candidates
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| FtpClientError::InvalidHost(host.to_string()))?;

    debug!("Resolved {}:{} to {}", host, port, addr);
    Ok(addr)
}

/// Opens a TCP connection, applying the optional connect and read timeouts.
pub fn connect_stream(
    addr: SocketAddr,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
) -> io::Result<TcpStream> {
    let stream = match connect_timeout {
        Some(timeout) => TcpStream::connect_timeout(&addr, timeout)?,
        None => TcpStream::connect(addr)?,
    };
    stream.set_read_timeout(read_timeout)?;
    Ok(stream)
}
