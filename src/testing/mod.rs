//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use crate::client::Console;

mod console;
pub use console::ScriptedConsole;

/// In-memory control stream.
///
/// Each `read` hands out exactly one scripted chunk, so a scripted reply is
/// seen the way a single TCP read would deliver it. Once the script is
/// exhausted reads return 0, as a closed connection does.
pub struct ScriptedStream {
    replies: VecDeque<Vec<u8>>,
    written: Vec<u8>,
}

impl ScriptedStream {
    pub fn new<I, R>(replies: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        Self {
            replies: replies.into_iter().map(|r| r.as_ref().to_vec()).collect(),
            written: Vec::new(),
        }
    }

    /// Command lines written so far, without terminators.
    pub fn sent_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.written)
            .split("\r\n")
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(mut chunk) = self.replies.pop_front() else {
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            self.replies.push_front(chunk.split_off(n));
        }
        Ok(n)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
