//! Control channel
//!
//! The persistent command/response connection and the reply framing
//! strategies it reads through.

pub mod channel;
pub mod framing;

pub use channel::ControlChannel;
pub use framing::{MultiLine, ResponseReader, SingleRead, reader_for};
