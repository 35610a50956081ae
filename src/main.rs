//! RAX FTP Client - Entry Point
//!
//! Connects to `<host> <port>`, logs in and runs the interactive prompt.

use clap::Parser;
use log::info;
use std::io;
use std::process;

use rax_ftp_client::auth::{LoginOutcome, authenticate};
use rax_ftp_client::client::{StdConsole, run_command_loop};
use rax_ftp_client::error::handlers::{exit_code, handle_error};
use rax_ftp_client::utils::network::{parse_port, resolve_server_addr};
use rax_ftp_client::{ClientConfig, FtpClientError, Session};

/// Interactive FTP client
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Server host name or IPv4 address
    host: String,

    /// Server control port
    port: String,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        handle_error(&e);
        process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<(), FtpClientError> {
    let port = parse_port(&cli.port)
        .ok_or_else(|| FtpClientError::InvalidArguments("Invalid destination port".into()))?;
    let config = ClientConfig::load(cli.config.as_deref())?;
    let server_addr = resolve_server_addr(&cli.host, port)?;

    info!("Connecting to {}", server_addr);
    let mut session = Session::connect(server_addr, config)?;
    let mut console = StdConsole::new();

    match authenticate(&mut session, &mut console)? {
        LoginOutcome::LoggedIn => {}
        LoginOutcome::InputClosed => {
            info!("Input closed before login completed");
            return Ok(());
        }
    }

    run_command_loop(session, &mut console, &mut io::stdout())
}
