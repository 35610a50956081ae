//! Module `channel`
//!
//! The control connection: sends command lines and reads classified replies.

use log::debug;
use std::io::{self, Read, Write};

use crate::control::framing::ResponseReader;
use crate::error::ControlError;
use crate::protocol::{FtpCommand, Response};

/// Command/response connection to the server's control port.
///
/// Every reply read is echoed to stdout so the user sees the server's own
/// wording.
pub struct ControlChannel<S> {
    stream: S,
    reader: Box<dyn ResponseReader>,
}

impl<S: Read + Write> ControlChannel<S> {
    pub fn new(stream: S, reader: Box<dyn ResponseReader>) -> Self {
        Self { stream, reader }
    }

    /// Writes the command followed by CRLF.
    pub fn send(&mut self, command: &FtpCommand) -> Result<(), ControlError> {
        debug!("Sending: {:?}", command);
        self.stream
            .write_all(command.to_wire().as_bytes())
            .and_then(|_| self.stream.flush())
            .map_err(ControlError::SendFailed)
    }

    /// Reads the next reply and echoes it.
    pub fn receive(&mut self) -> Result<Response, ControlError> {
        let raw = self.reader.read_reply(&mut self.stream)?;
        echo(&raw);
        let response = Response::parse(&raw)?;
        debug!("Received: {}", response);
        Ok(response)
    }

    /// One request/response round trip.
    pub fn exchange(&mut self, command: &FtpCommand) -> Result<Response, ControlError> {
        self.send(command)?;
        self.receive()
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }
}

fn echo(raw: &str) {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_all(raw.as_bytes());
    if !raw.ends_with('\n') {
        let _ = stdout.write_all(b"\n");
    }
    let _ = stdout.flush();
}
