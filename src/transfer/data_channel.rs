//! Module `data_channel`
//!
//! A short-lived data connection carrying one listing or file. The value is
//! moved into exactly one transfer and the socket is shut down when it is
//! closed or dropped.

use log::{debug, info};
use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use crate::config::ClientConfig;
use crate::error::TransferError;
use crate::utils::network::connect_stream;

pub struct DataChannel {
    stream: TcpStream,
    endpoint: SocketAddr,
}

impl DataChannel {
    /// Connects to the endpoint announced by PASV.
    pub fn connect(endpoint: SocketAddr, config: &ClientConfig) -> Result<Self, TransferError> {
        let stream = connect_stream(endpoint, config.connect_timeout(), config.read_timeout())
            .map_err(|e| TransferError::DataChannelFailed(endpoint, e))?;
        info!("Data channel connected to {}", endpoint);
        Ok(Self { stream, endpoint })
    }

    pub fn endpoint(&self) -> SocketAddr {
        self.endpoint
    }

    /// Shuts the connection down in both directions so the server sees EOF.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for DataChannel {
    fn drop(&mut self) {
        // Already-closed peers report NotConnected here
        let _ = self.stream.shutdown(Shutdown::Both);
        debug!("Data channel to {} closed", self.endpoint);
    }
}

impl Read for DataChannel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for DataChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}
