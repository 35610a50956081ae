//! Interactive command parsing
//!
//! Maps one line of user input to the command it names. Parsing never
//! touches the network; a command with a missing argument becomes a usage
//! message instead.

const CD_USAGE: &str = "Argument error\nUsage: cd <dir>";
const LOCAL_CD_USAGE: &str = "Argument error\nUsage: !cd <dir>";
const GET_USAGE: &str = "Filename can't be blank\nUsage: get <filename>";
const PUT_USAGE: &str = "Filename can't be blank\nUsage: put <filename>";

pub const HELP_TEXT: &str = "FTP Client commands:

 put  <filename>  --- Upload a file from local to server
 get  <filename>  --- Download a file from server to local
  ls              --- List all files under the present directory of the server
 !ls              --- List all files under the present directory of the client
 pwd              --- Display the present working directory of the server
!pwd              --- Display the present working directory of the client
  cd  <directory> --- Change the present working directory of the server
 !cd  <directory> --- Change the present working directory of the client
quit              --- Quit
";

pub const ILLEGAL_COMMAND: &str =
    "Illegal command\nPlease check command\nType \"help\" for all commands.";

#[derive(Debug, PartialEq)]
pub enum UserCommand {
    Quit,
    Pwd,
    LocalPwd,
    Cd(String),
    LocalCd(String),
    Ls,
    LocalLs,
    Get(String),
    Put(String),
    Help,
    /// Blank line
    Empty,
    /// A known command typed without its required argument
    Usage(&'static str),
    Unknown(String),
}

/// Parses one input line. Everything after the first run of whitespace is
/// the argument, so file names may contain inner spaces.
pub fn parse_user_command(raw: &str) -> UserCommand {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UserCommand::Empty;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let arg = parts.next().unwrap_or("").trim();

    match cmd {
        "quit" | "QUIT" => UserCommand::Quit,
        "pwd" | "PWD" => UserCommand::Pwd,
        "!pwd" | "!PWD" => UserCommand::LocalPwd,
        "ls" | "LIST" => UserCommand::Ls,
        "!ls" | "!LIST" => UserCommand::LocalLs,
        "help" | "HELP" => UserCommand::Help,
        "cd" | "CWD" => with_argument(arg, CD_USAGE, UserCommand::Cd),
        "!cd" | "!CWD" => with_argument(arg, LOCAL_CD_USAGE, UserCommand::LocalCd),
        "get" | "RETR" => with_argument(arg, GET_USAGE, UserCommand::Get),
        "put" | "STOR" => with_argument(arg, PUT_USAGE, UserCommand::Put),
        _ => UserCommand::Unknown(trimmed.to_string()),
    }
}

fn with_argument(
    arg: &str,
    usage: &'static str,
    build: fn(String) -> UserCommand,
) -> UserCommand {
    if arg.is_empty() {
        UserCommand::Usage(usage)
    } else {
        build(arg.to_string())
    }
}
