//! Error handling
//!
//! Defines error types and severity classification for the FTP client.

pub mod handlers;
pub mod types;

pub use types::*;
