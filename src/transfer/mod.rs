//! Transfer module for the FTP client
//!
//! Passive mode negotiation, data channel handling and the LIST, RETR and
//! STOR transfers built on them. Exactly one data channel exists per
//! transfer and it is closed before the final reply is read.

pub mod data_channel;
pub mod file_ops;
pub mod operations;
pub mod passive;
pub mod progress;
pub mod results;

// Re-export key types and functions
pub use data_channel::DataChannel;
pub use operations::{list, retrieve, store};
pub use passive::open_passive_data_channel;
pub use progress::Transfer;
pub use results::{TransferOutcome, TransferSummary};
