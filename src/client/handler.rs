//! Command dispatcher
//!
//! The read-eval loop of the client. Each line is parsed and run to
//! completion, including any data channel, before the next prompt.

use log::{debug, info};
use std::io::{Read, Write};

use crate::client::commands::{HELP_TEXT, ILLEGAL_COMMAND, UserCommand, parse_user_command};
use crate::client::local::{list_local_dir, resolve_local_dir};
use crate::client::{Console, Session};
use crate::error::FtpClientError;
use crate::error::handlers::{handle_error, is_fatal};
use crate::protocol::FtpCommand;
use crate::transfer::{self, Transfer, TransferOutcome};
use crate::utils::validation::{fits_command_buffer, is_valid_argument};

const PROMPT: &str = "ftp> ";

/// What the loop does after a command
#[derive(Debug, PartialEq)]
pub enum CommandFlow {
    Continue,
    Quit,
}

/// Runs commands until `quit`, end of input or a fatal error.
///
/// Recoverable errors are reported and the prompt comes back. `quit` sends
/// QUIT and closes the connection; end of input just closes it.
pub fn run_command_loop<S: Read + Write>(
    mut session: Session<S>,
    console: &mut dyn Console,
    out: &mut dyn Write,
) -> Result<(), FtpClientError> {
    loop {
        let Some(line) = console.read_line(PROMPT)? else {
            info!("End of input, closing session");
            return Ok(());
        };

        let command = parse_user_command(&line);
        debug!("User command: {:?}", command);

        match dispatch(&mut session, command, console, out) {
            Ok(CommandFlow::Continue) => {}
            Ok(CommandFlow::Quit) => {
                session.quit()?;
                return Ok(());
            }
            Err(e) if !is_fatal(&e) => {
                handle_error(&e);
                writeln!(out, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Runs one parsed command against the session.
pub fn dispatch<S: Read + Write>(
    session: &mut Session<S>,
    command: UserCommand,
    console: &mut dyn Console,
    out: &mut dyn Write,
) -> Result<CommandFlow, FtpClientError> {
    if let Some(arg) = argument(&command) {
        if !is_valid_argument(arg) || !fits_command_buffer(arg, session.config().buffer_size) {
            writeln!(out, "Argument error")?;
            return Ok(CommandFlow::Continue);
        }
    }

    match command {
        UserCommand::Quit => return Ok(CommandFlow::Quit),
        UserCommand::Empty => {}
        UserCommand::Help => write!(out, "{}", HELP_TEXT)?,
        UserCommand::Usage(usage) => writeln!(out, "{}", usage)?,
        UserCommand::Unknown(input) => {
            debug!("Not sending unknown command: {}", input);
            writeln!(out, "{}", ILLEGAL_COMMAND)?;
        }

        UserCommand::Pwd => {
            session.control().exchange(&FtpCommand::Pwd)?;
        }
        UserCommand::Cd(dir) => {
            session.control().exchange(&FtpCommand::Cwd(dir))?;
        }

        UserCommand::LocalPwd => writeln!(out, "{}", session.local_dir().display())?,
        UserCommand::LocalCd(dir) => match resolve_local_dir(session.local_dir(), &dir) {
            Ok(resolved) => {
                writeln!(out, "{}", resolved.display())?;
                session.set_local_dir(resolved);
            }
            Err(e) => {
                debug!("!cd {} failed: {}", dir, e);
                writeln!(out, "Path you entered doesn't exist\nPlease try again")?;
            }
        },
        UserCommand::LocalLs => match list_local_dir(session.local_dir()) {
            Ok(names) => {
                for name in names {
                    writeln!(out, "{}", name)?;
                }
            }
            Err(e) => {
                debug!("!ls in {} failed: {}", session.local_dir().display(), e);
                writeln!(out, "Can't list local directory")?;
            }
        },

        UserCommand::Ls => {
            let outcome = transfer::list(session, out)?;
            report(outcome, out)?;
        }
        UserCommand::Get(name) => {
            let outcome = transfer::retrieve(session, &name, console, &mut |t: &Transfer| {
                let _ = writeln!(out, "{}", t.completed());
            })?;
            report(outcome, out)?;
        }
        UserCommand::Put(name) => {
            let outcome = transfer::store(session, &name, console, &mut |t: &Transfer| {
                let _ = writeln!(out, "{}", t.completed());
            })?;
            report(outcome, out)?;
        }
    }

    Ok(CommandFlow::Continue)
}

fn argument(command: &UserCommand) -> Option<&str> {
    match command {
        UserCommand::Cd(arg)
        | UserCommand::LocalCd(arg)
        | UserCommand::Get(arg)
        | UserCommand::Put(arg) => Some(arg),
        _ => None,
    }
}

fn report(outcome: TransferOutcome, out: &mut dyn Write) -> std::io::Result<()> {
    match outcome {
        TransferOutcome::Completed(summary) => {
            if let (true, Some(expected)) = (summary.is_short(), summary.transfer.expected()) {
                writeln!(
                    out,
                    "Transfer incomplete: {} of {} bytes",
                    summary.bytes(),
                    expected
                )?;
            }
            Ok(())
        }
        TransferOutcome::RemoteFileMissing(name) => {
            info!("Remote file {} not found", name);
            Ok(())
        }
        TransferOutcome::Declined => Ok(()),
        TransferOutcome::LocalFileMissing(path) => {
            debug!("Local file {} missing", path.display());
            writeln!(out, "Can't find local file")
        }
    }
}
