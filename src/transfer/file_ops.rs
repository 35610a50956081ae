//! Module `file_ops`
//!
//! Byte pumps between the data channel and a local file or display.

use log::{debug, warn};
use std::io::{self, ErrorKind, Read, Write};

use crate::transfer::Transfer;

/// Which side of a copy failed.
#[derive(Debug)]
pub enum CopyError {
    Read(io::Error),
    Write(io::Error),
}

fn read_chunk<R: Read + ?Sized>(source: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    loop {
        match source.read(buffer) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

/// Copies chunks until `expected` bytes have been moved.
///
/// Stops on `completed >= expected`, so a zero-byte transfer performs no
/// I/O and an oversized final chunk is written whole. A zero-byte read
/// before that point ends the copy early and leaves the transfer
/// incomplete.
pub fn copy_sized<R, W>(
    source: &mut R,
    sink: &mut W,
    expected: u64,
    buffer_size: usize,
    progress: &mut dyn FnMut(&Transfer),
) -> Result<Transfer, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut transfer = Transfer::sized(expected);
    let mut buffer = vec![0u8; buffer_size];

    while !transfer.is_complete() {
        let n = read_chunk(source, &mut buffer).map_err(CopyError::Read)?;
        if n == 0 {
            warn!(
                "Stream ended after {} of {} bytes",
                transfer.completed(),
                expected
            );
            break;
        }
        sink.write_all(&buffer[..n]).map_err(CopyError::Write)?;
        transfer.record(n);
        progress(&transfer);
    }

    sink.flush().map_err(CopyError::Write)?;
    debug!("Copied {} bytes (expected {})", transfer.completed(), expected);
    Ok(transfer)
}

/// Copies chunks until the source reports end of stream.
pub fn drain<R, W>(source: &mut R, sink: &mut W, buffer_size: usize) -> Result<Transfer, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut transfer = Transfer::open_ended();
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let n = read_chunk(source, &mut buffer).map_err(CopyError::Read)?;
        if n == 0 {
            break;
        }
        sink.write_all(&buffer[..n]).map_err(CopyError::Write)?;
        transfer.record(n);
    }

    sink.flush().map_err(CopyError::Write)?;
    Ok(transfer)
}
