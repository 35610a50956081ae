//! Error types
//!
//! Defines domain-specific error types for each module of the FTP client.

use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Control channel errors
#[derive(Debug)]
pub enum ControlError {
    ConnectFailed(SocketAddr, io::Error),
    SendFailed(io::Error),
    ReceiveFailed(io::Error),
    ConnectionClosed,
    MalformedResponse(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::ConnectFailed(addr, e) => {
                write!(f, "Can't connect to server {}: {}", addr, e)
            }
            ControlError::SendFailed(e) => write!(f, "Can't send command to server: {}", e),
            ControlError::ReceiveFailed(e) => write!(f, "Can't get response from server: {}", e),
            ControlError::ConnectionClosed => write!(f, "Server didn't respond"),
            ControlError::MalformedResponse(raw) => {
                write!(f, "Malformed response from server: {:?}", raw)
            }
        }
    }
}

impl std::error::Error for ControlError {}

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    ServiceUnavailable(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ServiceUnavailable(reply) => {
                write!(f, "Server refused the session: {}", reply)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Transfer module errors
#[derive(Debug)]
pub enum TransferError {
    MalformedPasvReply(String),
    InvalidDataPort(u32),
    PassiveRefused(String),
    DataChannelFailed(SocketAddr, io::Error),
    StreamFailed(io::Error),
    MalformedSizeReply(String),
    CommandRefused(String),
    LocalFile(PathBuf, io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::MalformedPasvReply(reply) => {
                write!(f, "Malformed PASV reply: {:?}", reply)
            }
            TransferError::InvalidDataPort(port) => {
                write!(f, "Invalid data transfer port {}", port)
            }
            TransferError::PassiveRefused(reply) => {
                write!(f, "Server refused passive mode: {}", reply)
            }
            TransferError::DataChannelFailed(addr, e) => {
                write!(f, "Can't create data channel to {}: {}", addr, e)
            }
            TransferError::StreamFailed(e) => write!(f, "Data transfer failed: {}", e),
            TransferError::MalformedSizeReply(reply) => {
                write!(f, "Malformed SIZE reply: {:?}", reply)
            }
            TransferError::CommandRefused(reply) => write!(f, "Transfer refused: {}", reply),
            TransferError::LocalFile(path, e) => {
                write!(f, "Local file {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for TransferError {}

/// General FTP client error that encompasses all error types
#[derive(Debug)]
pub enum FtpClientError {
    Control(ControlError),
    Auth(AuthError),
    Transfer(TransferError),
    InvalidArguments(String),
    InvalidHost(String),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for FtpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpClientError::Control(e) => write!(f, "{}", e),
            FtpClientError::Auth(e) => write!(f, "Authentication error: {}", e),
            FtpClientError::Transfer(e) => write!(f, "{}", e),
            FtpClientError::InvalidArguments(msg) => write!(f, "{}", msg),
            FtpClientError::InvalidHost(host) => write!(f, "Invalid target host: {}", host),
            FtpClientError::Config(e) => write!(f, "Configuration error: {}", e),
            FtpClientError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FtpClientError {}

impl From<ControlError> for FtpClientError {
    fn from(error: ControlError) -> Self {
        FtpClientError::Control(error)
    }
}

impl From<AuthError> for FtpClientError {
    fn from(error: AuthError) -> Self {
        FtpClientError::Auth(error)
    }
}

impl From<TransferError> for FtpClientError {
    fn from(error: TransferError) -> Self {
        FtpClientError::Transfer(error)
    }
}

impl From<config::ConfigError> for FtpClientError {
    fn from(error: config::ConfigError) -> Self {
        FtpClientError::Config(error)
    }
}

impl From<io::Error> for FtpClientError {
    fn from(error: io::Error) -> Self {
        FtpClientError::IoError(error)
    }
}
