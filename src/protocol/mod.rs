//! FTP Protocol implementation
//!
//! Wire commands sent by the client and parsing of server replies.

pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::FtpCommand;
pub use parser::{PassiveEndpoint, parse_pasv_reply, parse_size_reply};
pub use responses::Response;
