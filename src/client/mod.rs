//! Client session and command loop
//!
//! Owns the connection to the server, the interactive prompt and the
//! dispatcher that turns user input into protocol operations.

pub mod commands;
pub mod handler;
pub mod local;
pub mod prompt;
pub mod session;

pub use handler::{CommandFlow, run_command_loop};
pub use prompt::{Console, StdConsole};
pub use session::Session;
