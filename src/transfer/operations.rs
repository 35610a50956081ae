//! Transfer operations
//!
//! LIST, RETR and STOR. Each one pairs a control command with a single
//! data channel: negotiate, send the command, read the preliminary reply,
//! stream, close the data channel, then read the final reply.

use log::{info, warn};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::client::{Console, Session};
use crate::error::handlers::is_fatal;
use crate::error::{FtpClientError, TransferError};
use crate::protocol::responses::{FILE_NOT_FOUND, FILE_SIZE};
use crate::protocol::{FtpCommand, Response, parse_size_reply};
use crate::transfer::file_ops::{CopyError, copy_sized, drain};
use crate::transfer::passive::open_passive_data_channel;
use crate::transfer::results::{TransferOutcome, TransferSummary};
use crate::transfer::Transfer;
use crate::utils::validation::local_file_exists;

/// Lists the remote working directory into `display`.
pub fn list<S: Read + Write>(
    session: &mut Session<S>,
    display: &mut dyn Write,
) -> Result<TransferOutcome, FtpClientError> {
    let mut data = open_passive_data_channel(session)?;
    let early_final = start_transfer(session, &FtpCommand::List)?;

    let copied = drain(&mut data, display, session.config().buffer_size).map_err(|e| match e {
        CopyError::Read(e) => FtpClientError::from(TransferError::StreamFailed(e)),
        CopyError::Write(e) => FtpClientError::IoError(e),
    });
    data.close();

    conclude(session, early_final, copied)
}

/// Downloads `name` into the local directory.
///
/// The remote size is checked before any data channel is opened, so a
/// missing remote file leaves the local side untouched. An existing local
/// file is only truncated after the server accepts RETR.
pub fn retrieve<S: Read + Write>(
    session: &mut Session<S>,
    name: &str,
    console: &mut dyn Console,
    progress: &mut dyn FnMut(&Transfer),
) -> Result<TransferOutcome, FtpClientError> {
    let size_reply = session
        .control()
        .exchange(&FtpCommand::Size(name.to_string()))?;
    let expected = match size_reply.code() {
        FILE_SIZE => parse_size_reply(&size_reply)?,
        FILE_NOT_FOUND => return Ok(TransferOutcome::RemoteFileMissing(name.to_string())),
        _ => return Err(TransferError::CommandRefused(size_reply.to_string()).into()),
    };

    let local_path = session.local_path(name);
    if local_file_exists(&local_path) && !console.confirm_overwrite(name)? {
        return Ok(TransferOutcome::Declined);
    }

    let mut data = open_passive_data_channel(session)?;
    let early_final = start_transfer(session, &FtpCommand::Retr(name.to_string()))?;

    // Created only once the server has accepted RETR
    let mut file = match File::create(&local_path) {
        Ok(file) => file,
        Err(e) => {
            data.close();
            let failed = Err(TransferError::LocalFile(local_path, e).into());
            return conclude(session, early_final, failed);
        }
    };

    info!("Receiving {} ({} bytes)", name, expected);
    let copied = copy_sized(
        &mut data,
        &mut file,
        expected,
        session.config().buffer_size,
        progress,
    )
    .map_err(|e| match e {
        CopyError::Read(e) => FtpClientError::from(TransferError::StreamFailed(e)),
        CopyError::Write(e) => TransferError::LocalFile(local_path.clone(), e).into(),
    });
    drop(file);
    data.close();

    conclude(session, early_final, copied)
}

/// Uploads the local file `name` under the same name.
pub fn store<S: Read + Write>(
    session: &mut Session<S>,
    name: &str,
    console: &mut dyn Console,
    progress: &mut dyn FnMut(&Transfer),
) -> Result<TransferOutcome, FtpClientError> {
    let local_path = session.local_path(name);
    if !local_file_exists(&local_path) {
        return Ok(TransferOutcome::LocalFileMissing(local_path));
    }

    let local_error = |e: io::Error| TransferError::LocalFile(local_path.clone(), e);
    let mut file = File::open(&local_path).map_err(local_error)?;
    let size = file.seek(SeekFrom::End(0)).map_err(local_error)?;
    file.seek(SeekFrom::Start(0)).map_err(local_error)?;

    let mut data = open_passive_data_channel(session)?;

    let size_reply = session
        .control()
        .exchange(&FtpCommand::Size(name.to_string()))?;
    if size_reply.code() == FILE_SIZE && !console.confirm_overwrite(name)? {
        data.close();
        return Ok(TransferOutcome::Declined);
    }

    let early_final = start_transfer(session, &FtpCommand::Stor(name.to_string()))?;

    info!("Sending {} ({} bytes)", name, size);
    let copied = copy_sized(
        &mut file,
        &mut data,
        size,
        session.config().buffer_size,
        progress,
    )
    .map_err(|e| match e {
        CopyError::Read(e) => FtpClientError::from(local_error(e)),
        CopyError::Write(e) => TransferError::StreamFailed(e).into(),
    });
    drop(file);
    data.close();

    conclude(session, early_final, copied)
}

/// Sends the transfer command and expects a 1xx reply.
///
/// Returns the final reply when the server's completion arrived in the same
/// read as the preliminary reply.
fn start_transfer<S: Read + Write>(
    session: &mut Session<S>,
    command: &FtpCommand,
) -> Result<Option<Response>, FtpClientError> {
    let reply = session.control().exchange(command)?;
    if !reply.is_preliminary() {
        return Err(TransferError::CommandRefused(reply.to_string()).into());
    }
    Ok(reply.trailing_reply())
}

fn finish_transfer<S: Read + Write>(
    session: &mut Session<S>,
    early_final: Option<Response>,
) -> Result<Response, FtpClientError> {
    match early_final {
        Some(reply) => Ok(reply),
        None => Ok(session.control().receive()?),
    }
}

/// Reads the final reply and builds the outcome.
///
/// A recoverable failure during streaming still consumes the final reply
/// so the control channel stays in step with the server.
fn conclude<S: Read + Write>(
    session: &mut Session<S>,
    early_final: Option<Response>,
    copied: Result<Transfer, FtpClientError>,
) -> Result<TransferOutcome, FtpClientError> {
    match copied {
        Ok(transfer) => {
            let final_reply = finish_transfer(session, early_final)?;
            let summary = TransferSummary {
                transfer,
                final_reply,
            };
            if summary.is_short() {
                warn!(
                    "Transfer ended short: {} of {:?} bytes",
                    summary.bytes(),
                    summary.transfer.expected()
                );
            }
            Ok(TransferOutcome::Completed(summary))
        }
        Err(e) if !is_fatal(&e) => {
            finish_transfer(session, early_final)?;
            Err(e)
        }
        Err(e) => Err(e),
    }
}
