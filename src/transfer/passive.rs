//! Passive mode negotiation
//!
//! Issues PASV, decodes the announced endpoint and opens the data channel.

use log::debug;
use std::io::{Read, Write};
use std::net::{IpAddr, SocketAddr};

use crate::client::Session;
use crate::config::PasvHostSource;
use crate::error::{FtpClientError, TransferError};
use crate::protocol::responses::ENTERING_PASSIVE;
use crate::protocol::{FtpCommand, PassiveEndpoint, parse_pasv_reply};
use crate::transfer::DataChannel;

/// Negotiates passive mode and connects the data channel for one transfer.
///
/// Must not be called again until the returned channel has been closed.
pub fn open_passive_data_channel<S: Read + Write>(
    session: &mut Session<S>,
) -> Result<DataChannel, FtpClientError> {
    let response = session.control().exchange(&FtpCommand::Pasv)?;
    if response.code() != ENTERING_PASSIVE {
        return Err(TransferError::PassiveRefused(response.to_string()).into());
    }

    let announced = parse_pasv_reply(&response)?;
    let endpoint = data_endpoint(announced, session.server_addr(), session.config().pasv_host);
    debug!("PASV announced {:?}, connecting to {}", announced, endpoint);
    println!("Passive data port: {}", endpoint.port());

    Ok(DataChannel::connect(endpoint, session.config())?)
}

/// Chooses the host for the data connection. The port always comes from
/// the reply.
pub fn data_endpoint(
    announced: PassiveEndpoint,
    server_addr: SocketAddr,
    source: PasvHostSource,
) -> SocketAddr {
    let host = match source {
        PasvHostSource::ControlPeer => server_addr.ip(),
        PasvHostSource::Reply => IpAddr::V4(announced.host),
    };
    SocketAddr::new(host, announced.port)
}
