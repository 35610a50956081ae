//! RAX FTP Client
//!
//! An interactive FTP client: control channel, login handshake, passive
//! mode data channels and LIST/RETR/STOR transfers.

pub mod auth;
pub mod client;
pub mod config;
pub mod control;
pub mod error;
pub mod protocol;
pub mod transfer;
pub mod utils;

#[cfg(test)]
mod testing;

pub use client::Session;
pub use config::ClientConfig;
pub use error::FtpClientError;
