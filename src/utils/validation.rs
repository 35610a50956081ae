//! Input validation utilities
//!
//! Checks applied to user input before anything is sent to the server.

use std::path::Path;

/// Whether an argument fits in a command line built from a buffer of
/// `buffer_size` bytes. Leaves room for the verb and terminator.
pub fn fits_command_buffer(input: &str, buffer_size: usize) -> bool {
    input.len() <= buffer_size / 3
}

/// Rejects input that would split or corrupt a command line.
pub fn is_valid_argument(input: &str) -> bool {
    !input.contains(['\r', '\n', '\0'])
}

/// Whether a regular file exists at `path`.
pub fn local_file_exists(path: &Path) -> bool {
    path.is_file()
}
