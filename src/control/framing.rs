//! Module `framing`
//!
//! Strategies for cutting one server reply out of the control connection.
//! The control channel only depends on the [`ResponseReader`] trait, so the
//! strategy can be swapped without touching any caller.

use std::io::{ErrorKind, Read};

use crate::config::ResponseFraming;
use crate::error::ControlError;

/// Reads the next reply from the control stream.
pub trait ResponseReader {
    /// Returns the raw text of one reply. A closed connection is
    /// `ControlError::ConnectionClosed`.
    fn read_reply(&mut self, stream: &mut dyn Read) -> Result<String, ControlError>;
}

/// Builds the strategy selected by configuration.
pub fn reader_for(framing: ResponseFraming, buffer_size: usize) -> Box<dyn ResponseReader> {
    match framing {
        ResponseFraming::SingleRead => Box::new(SingleRead::new(buffer_size)),
        ResponseFraming::MultiLine => Box::new(MultiLine::new(buffer_size)),
    }
}

fn read_retrying(stream: &mut dyn Read, buf: &mut [u8]) -> Result<usize, ControlError> {
    loop {
        match stream.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ControlError::ReceiveFailed(e)),
        }
    }
}

/// Whatever one read returns is the reply.
///
/// Relies on the server answering each command with a small payload that
/// arrives in a single segment.
pub struct SingleRead {
    buffer: Vec<u8>,
}

impl SingleRead {
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer: vec![0; buffer_size],
        }
    }
}

impl ResponseReader for SingleRead {
    fn read_reply(&mut self, stream: &mut dyn Read) -> Result<String, ControlError> {
        let n = read_retrying(stream, &mut self.buffer)?;
        if n == 0 {
            return Err(ControlError::ConnectionClosed);
        }
        Ok(String::from_utf8_lossy(&self.buffer[..n]).into_owned())
    }
}

/// Line framing per RFC 959 section 4.2.
///
/// A reply is one line `ddd text`, or a block opened by `ddd-text` and
/// closed by a line starting with the same code and a space. Bytes past
/// the end of the reply are kept for the next call.
pub struct MultiLine {
    chunk: Vec<u8>,
    pending: Vec<u8>,
}

impl MultiLine {
    pub fn new(buffer_size: usize) -> Self {
        Self {
            chunk: vec![0; buffer_size],
            pending: Vec::new(),
        }
    }

    /// Length of the first complete reply in `pending`, if there is one.
    fn complete_reply_len(&self) -> Option<usize> {
        let mut offset = 0;
        let mut opening: Option<[u8; 3]> = None;

        while let Some(pos) = self.pending[offset..].iter().position(|b| *b == b'\n') {
            let line = &self.pending[offset..offset + pos + 1];
            offset += pos + 1;

            match opening {
                None => {
                    if line.len() >= 4 && line[3] == b'-' {
                        opening = Some([line[0], line[1], line[2]]);
                    } else {
                        return Some(offset);
                    }
                }
                Some(code) => {
                    if line.len() >= 4 && line[..3] == code && line[3] == b' ' {
                        return Some(offset);
                    }
                }
            }
        }
        None
    }
}

impl ResponseReader for MultiLine {
    fn read_reply(&mut self, stream: &mut dyn Read) -> Result<String, ControlError> {
        loop {
            if let Some(len) = self.complete_reply_len() {
                let reply: Vec<u8> = self.pending.drain(..len).collect();
                return Ok(String::from_utf8_lossy(&reply).into_owned());
            }

            let n = read_retrying(stream, &mut self.chunk)?;
            if n == 0 {
                if self.pending.is_empty() {
                    return Err(ControlError::ConnectionClosed);
                }
                // Unterminated last line before close
                let reply = std::mem::take(&mut self.pending);
                return Ok(String::from_utf8_lossy(&reply).into_owned());
            }
            self.pending.extend_from_slice(&self.chunk[..n]);
        }
    }
}
