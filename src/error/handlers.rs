//! Error handlers
//!
//! Decides which errors end the session and which only abort the current
//! command.

use crate::error::types::{FtpClientError, TransferError};
use log::{error, warn};

/// Log an FTP client error at a level matching its severity
pub fn handle_error(err: &FtpClientError) {
    if is_fatal(err) {
        error!("FTP Client Error: {}", err);
    } else {
        warn!("Command aborted: {}", err);
    }
}

/// Whether the error leaves the session unusable.
///
/// Transport failures and undecodable replies are fatal. Problems scoped to
/// one command leave the control channel in sync and are recoverable.
pub fn is_fatal(err: &FtpClientError) -> bool {
    match err {
        FtpClientError::Control(_) => true,
        FtpClientError::Auth(_) => true,
        FtpClientError::Transfer(e) => match e {
            TransferError::MalformedPasvReply(_) => true,
            TransferError::DataChannelFailed(_, _) => true,
            TransferError::StreamFailed(_) => true,
            TransferError::InvalidDataPort(_) => false,
            TransferError::PassiveRefused(_) => false,
            TransferError::MalformedSizeReply(_) => false,
            TransferError::CommandRefused(_) => false,
            TransferError::LocalFile(_, _) => false,
        },
        FtpClientError::InvalidArguments(_) => true,
        FtpClientError::InvalidHost(_) => true,
        FtpClientError::Config(_) => true,
        FtpClientError::IoError(_) => true,
    }
}

/// Process exit status for an error that reached `main`
pub fn exit_code(_err: &FtpClientError) -> i32 {
    1
}
