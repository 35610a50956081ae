//! FTP reply parsing
//!
//! Extracts the structured payloads carried by PASV and SIZE replies.

use std::net::Ipv4Addr;

use crate::error::TransferError;
use crate::protocol::Response;
use crate::utils::network::is_legal_port;

/// Data endpoint announced by a `227 Entering Passive Mode` reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassiveEndpoint {
    pub host: Ipv4Addr,
    pub port: u16,
}

/// Decodes the `h1,h2,h3,h4,p1,p2` sextet of a PASV reply.
///
/// The sextet is taken from between the last `(` and the following `)`.
/// Servers that omit the parentheses are handled by taking the first run of
/// digits and commas after the reply code.
pub fn parse_pasv_reply(response: &Response) -> Result<PassiveEndpoint, TransferError> {
    let malformed = || TransferError::MalformedPasvReply(response.to_string());

    let text = response.message();
    let sextet = match text.rfind('(') {
        Some(open) => {
            let inner = &text[open + 1..];
            let close = inner.find(')').ok_or_else(malformed)?;
            &inner[..close]
        }
        None => {
            let start = text.find(|c: char| c.is_ascii_digit()).ok_or_else(malformed)?;
            let run = &text[start..];
            let end = run
                .find(|c: char| !(c.is_ascii_digit() || c == ','))
                .unwrap_or(run.len());
            &run[..end]
        }
    };

    let fields = sextet
        .split(',')
        .map(|field| field.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| malformed())?;

    let [h1, h2, h3, h4, p1, p2] = fields[..] else {
        return Err(malformed());
    };

    let port = u32::from(p1) * 256 + u32::from(p2);
    if !is_legal_port(i64::from(port)) {
        return Err(TransferError::InvalidDataPort(port));
    }

    Ok(PassiveEndpoint {
        host: Ipv4Addr::new(h1, h2, h3, h4),
        port: port as u16,
    })
}

/// Extracts the byte count from a `213 <size>` reply.
pub fn parse_size_reply(response: &Response) -> Result<u64, TransferError> {
    response
        .message()
        .split_whitespace()
        .next()
        .and_then(|size| size.parse::<u64>().ok())
        .ok_or_else(|| TransferError::MalformedSizeReply(response.to_string()))
}
