//! Module `commands`
//!
//! Defines the FTP commands this client sends on the control channel and
//! their wire representation.

use std::fmt;

/// Represents an FTP command sent to the server.
///
/// Commands that take an argument store it as a `String`.
#[derive(Clone, PartialEq)]
pub enum FtpCommand {
    User(String), // Username for login
    Pass(String), // Password for login
    Pwd,
    Cwd(String), // Change remote working directory
    Pasv,        // Enter passive mode
    List,
    Size(String), // Query remote file size
    Retr(String), // Retrieve/download file
    Stor(String), // Store/upload file
    Quit,
}

impl FtpCommand {
    /// Returns the command line as sent on the wire, CRLF included.
    pub fn to_wire(&self) -> String {
        format!("{}\r\n", self)
    }

    /// Returns the bare command verb.
    pub fn verb(&self) -> &'static str {
        match self {
            FtpCommand::User(_) => "USER",
            FtpCommand::Pass(_) => "PASS",
            FtpCommand::Pwd => "PWD",
            FtpCommand::Cwd(_) => "CWD",
            FtpCommand::Pasv => "PASV",
            FtpCommand::List => "LIST",
            FtpCommand::Size(_) => "SIZE",
            FtpCommand::Retr(_) => "RETR",
            FtpCommand::Stor(_) => "STOR",
            FtpCommand::Quit => "QUIT",
        }
    }

    fn argument(&self) -> Option<&str> {
        match self {
            FtpCommand::User(arg)
            | FtpCommand::Pass(arg)
            | FtpCommand::Cwd(arg)
            | FtpCommand::Size(arg)
            | FtpCommand::Retr(arg)
            | FtpCommand::Stor(arg) => Some(arg),
            FtpCommand::Pwd | FtpCommand::Pasv | FtpCommand::List | FtpCommand::Quit => None,
        }
    }
}

impl fmt::Display for FtpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument() {
            Some(arg) => write!(f, "{} {}", self.verb(), arg),
            None => write!(f, "{}", self.verb()),
        }
    }
}

// Keeps passwords out of log output.
impl fmt::Debug for FtpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpCommand::Pass(_) => write!(f, "PASS ****"),
            other => write!(f, "{}", other),
        }
    }
}
