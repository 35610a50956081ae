//! Client session management
//!
//! A `Session` is the single connection to one server. It is created once
//! after the address is resolved and is passed by reference to every
//! component that talks to the server.

use log::{info, warn};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::{Path, PathBuf};

use crate::config::ClientConfig;
use crate::control::{ControlChannel, reader_for};
use crate::error::{ControlError, FtpClientError};
use crate::protocol::responses::CLOSING_CONTROL;
use crate::protocol::{FtpCommand, Response};
use crate::utils::network::connect_stream;

pub struct Session<S = TcpStream> {
    control: ControlChannel<S>,
    server_addr: SocketAddr,
    local_dir: PathBuf,
    config: ClientConfig,
}

impl Session<TcpStream> {
    /// Opens the control connection to `server_addr`.
    pub fn connect(server_addr: SocketAddr, config: ClientConfig) -> Result<Self, FtpClientError> {
        let stream = connect_stream(server_addr, config.connect_timeout(), config.read_timeout())
            .map_err(|e| ControlError::ConnectFailed(server_addr, e))?;

        // Keep the address actually reached; PASV host derivation uses it.
        let peer_addr = stream.peer_addr().unwrap_or(server_addr);
        info!("Connected to {}", peer_addr);

        let local_dir = std::env::current_dir()?;
        Ok(Self::with_stream(stream, peer_addr, config, local_dir))
    }
}

impl<S: Read + Write> Session<S> {
    pub fn with_stream(
        stream: S,
        server_addr: SocketAddr,
        config: ClientConfig,
        local_dir: PathBuf,
    ) -> Self {
        let reader = reader_for(config.response_framing, config.buffer_size);
        Self {
            control: ControlChannel::new(stream, reader),
            server_addr,
            local_dir,
            config,
        }
    }

    pub fn control(&mut self) -> &mut ControlChannel<S> {
        &mut self.control
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Directory that `!` commands and transfers resolve local names against.
    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }

    pub fn set_local_dir(&mut self, dir: PathBuf) {
        self.local_dir = dir;
    }

    pub fn local_path(&self, name: &str) -> PathBuf {
        self.local_dir.join(name)
    }

    /// Sends QUIT, reads the farewell and closes the connection.
    pub fn quit(mut self) -> Result<Response, ControlError> {
        let response = self.control.exchange(&FtpCommand::Quit)?;
        if response.code() != CLOSING_CONTROL {
            warn!("Unexpected reply to QUIT: {}", response);
        }
        info!("Session with {} closed", self.server_addr);
        Ok(response)
    }
}
