//! Local directory commands
//!
//! `!pwd`, `!cd` and `!ls` work on the session's local directory and never
//! touch the control connection.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Resolves `target` against `current` and checks that it is a directory.
pub fn resolve_local_dir(current: &Path, target: &str) -> io::Result<PathBuf> {
    let resolved = current.join(target).canonicalize()?;
    if !resolved.is_dir() {
        return Err(io::Error::from(ErrorKind::NotADirectory));
    }
    Ok(resolved)
}

/// Names in `dir`, sorted, without hidden entries. Directories carry a
/// trailing `/`.
pub fn list_local_dir(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if entry.file_type()?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}
