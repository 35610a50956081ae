//! Interactive prompts
//!
//! The terminal side of the session: reading command and credential lines,
//! and asking whether an existing file may be overwritten.

use std::io::{self, BufRead, Write};

/// Source of user input for the dispatcher, the login handshake and the
/// transfer executor.
pub trait Console {
    /// Shows `prompt` and reads one line without its terminator.
    /// `None` means input has ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Asks whether `name` may be overwritten.
    fn confirm_overwrite(&mut self, name: &str) -> io::Result<bool>;
}

/// Interprets one answer to the overwrite question.
///
/// `y`/`Y` accept, `n`/`N` and an empty line decline, anything else is
/// invalid and the question is asked again.
pub fn interpret_confirmation(answer: &str) -> Option<bool> {
    match answer {
        "y" | "Y" => Some(true),
        "n" | "N" | "" => Some(false),
        _ => None,
    }
}

/// Console bound to the process's stdin and stdout.
pub struct StdConsole {
    stdin: io::Stdin,
}

impl StdConsole {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn confirm_overwrite(&mut self, name: &str) -> io::Result<bool> {
        loop {
            println!("File {} already exists.", name);
            let Some(answer) = self.read_line("Proceed to overwrite? [y/N]:")? else {
                return Ok(false);
            };
            match interpret_confirmation(&answer) {
                Some(decision) => return Ok(decision),
                None => eprintln!("Invalid sentence [y/N]"),
            }
        }
    }
}
