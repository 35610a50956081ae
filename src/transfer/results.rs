//! Transfer result types
//!
//! Defines the outcomes returned by LIST, RETR and STOR. Only fatal
//! failures are errors; the rest are ordinary outcomes.

use std::path::PathBuf;

use crate::protocol::Response;
use crate::transfer::Transfer;

/// Result of a data channel transfer
#[derive(Debug)]
pub enum TransferOutcome {
    Completed(TransferSummary),
    /// SIZE answered 550
    RemoteFileMissing(String),
    /// The user declined to overwrite an existing file
    Declined,
    /// The file to upload is not a readable regular file
    LocalFileMissing(PathBuf),
}

/// What a finished transfer moved and how the server concluded it
#[derive(Debug)]
pub struct TransferSummary {
    pub transfer: Transfer,
    pub final_reply: Response,
}

impl TransferSummary {
    pub fn bytes(&self) -> u64 {
        self.transfer.completed()
    }

    /// The stream ended before the declared size was reached.
    pub fn is_short(&self) -> bool {
        self.transfer.expected().is_some() && !self.transfer.is_complete()
    }
}
