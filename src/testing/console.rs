//! Scripted console, shared with the integration tests.
//!
//! Resolves `Console` through the parent module so it compiles both inside
//! the crate and as a `#[path]` module of `tests/common`.

use std::collections::VecDeque;
use std::io;

use super::Console;

/// Console fed from a fixed list of input lines and overwrite answers.
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    confirmations: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub confirm_calls: usize,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            confirmations: VecDeque::new(),
            prompts: Vec::new(),
            confirm_calls: 0,
        }
    }

    pub fn with_confirmations(mut self, answers: &[bool]) -> Self {
        self.confirmations = answers.iter().copied().collect();
        self
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }

    fn confirm_overwrite(&mut self, _name: &str) -> io::Result<bool> {
        self.confirm_calls += 1;
        Ok(self.confirmations.pop_front().unwrap_or(false))
    }
}
