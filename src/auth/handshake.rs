//! Login handshake
//!
//! Drives USER/PASS until the server accepts the session. Each stage
//! re-prompts for as long as the server keeps rejecting the input; the
//! retry is deliberately unbounded since a person is typing at the prompt.

use log::{info, warn};
use std::io::{Read, Write};

use crate::auth::results::LoginOutcome;
use crate::client::{Console, Session};
use crate::error::{AuthError, FtpClientError};
use crate::protocol::FtpCommand;
use crate::protocol::responses::{LOGIN_SUCCESS, PASSWORD_REQUIRED};
use crate::utils::validation::{fits_command_buffer, is_valid_argument};

/// Reads the greeting, then runs the username and password stages.
pub fn authenticate<S: Read + Write>(
    session: &mut Session<S>,
    console: &mut dyn Console,
) -> Result<LoginOutcome, FtpClientError> {
    let mut greeting = session.control().receive()?;
    while greeting.is_preliminary() {
        greeting = session.control().receive()?;
    }
    if !greeting.is_completion() {
        return Err(AuthError::ServiceUnavailable(greeting.to_string()).into());
    }

    let buffer_size = session.config().buffer_size;

    // Username stage
    loop {
        let Some(username) = prompt_credential(console, "Name: ", "Username", buffer_size)? else {
            return Ok(LoginOutcome::InputClosed);
        };
        let response = session.control().exchange(&FtpCommand::User(username.clone()))?;
        match response.code() {
            PASSWORD_REQUIRED => break,
            LOGIN_SUCCESS => {
                info!("Logged in as {} without password", username);
                return Ok(LoginOutcome::LoggedIn);
            }
            code => warn!("USER {} rejected with {}", username, code),
        }
    }

    // Password stage
    loop {
        let Some(password) = prompt_credential(console, "Password: ", "Password", buffer_size)?
        else {
            return Ok(LoginOutcome::InputClosed);
        };
        let response = session.control().exchange(&FtpCommand::Pass(password))?;
        if response.code() == LOGIN_SUCCESS {
            info!("Login successful");
            return Ok(LoginOutcome::LoggedIn);
        }
        warn!("PASS rejected with {}", response.code());
    }
}

/// Prompts until the input fits in a command line or input ends.
fn prompt_credential(
    console: &mut dyn Console,
    prompt: &str,
    label: &str,
    buffer_size: usize,
) -> Result<Option<String>, FtpClientError> {
    loop {
        let Some(input) = console.read_line(prompt)? else {
            return Ok(None);
        };
        if !fits_command_buffer(&input, buffer_size) {
            println!("{} too long.", label);
            continue;
        }
        if !is_valid_argument(&input) {
            println!("{} contains invalid characters.", label);
            continue;
        }
        return Ok(Some(input));
    }
}
