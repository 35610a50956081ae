mod common;

use std::fs;
use std::path::Path;

use common::{MockServer, PASSWORD, ScriptedConsole, USER};
use rax_ftp_client::auth::{LoginOutcome, authenticate};
use rax_ftp_client::client::run_command_loop;
use rax_ftp_client::config::ResponseFraming;
use rax_ftp_client::{ClientConfig, Session};

/// Logs in, runs `commands` and returns what the client printed along with
/// every command the server received.
fn run_session(
    server: MockServer,
    config: ClientConfig,
    local_dir: &Path,
    console: &mut ScriptedConsole,
) -> (String, Vec<String>) {
    let mut session = Session::connect(server.addr, config).unwrap();
    session.set_local_dir(local_dir.to_path_buf());

    assert_eq!(
        authenticate(&mut session, console).unwrap(),
        LoginOutcome::LoggedIn
    );

    let mut out = Vec::new();
    run_command_loop(session, console, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), server.finish())
}

fn login_then(commands: &[&str]) -> ScriptedConsole {
    let mut lines = vec![USER, PASSWORD];
    lines.extend_from_slice(commands);
    ScriptedConsole::new(&lines)
}

#[test]
fn test_login_retry_and_pwd() {
    let remote = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    let server = MockServer::start(remote.path());
    let mut console =
        ScriptedConsole::new(&["mallory", USER, "wrong", PASSWORD, "pwd", "pwd", "quit"]);

    let (_, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert_eq!(
        received,
        vec![
            "USER mallory",
            "USER alice",
            "PASS wrong",
            "PASS secret",
            "PWD",
            "PWD",
            "QUIT"
        ]
    );
}

#[test]
fn test_list_remote_directory() {
    let remote = tempfile::tempdir().unwrap();
    fs::write(remote.path().join("notes.txt"), b"n").unwrap();
    fs::create_dir(remote.path().join("photos")).unwrap();
    let local = tempfile::tempdir().unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["ls", "quit"]);

    let (out, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert!(out.contains("notes.txt\r\nphotos\r\n"));
    assert_eq!(&received[2..], ["PASV", "LIST", "QUIT"]);
}

#[test]
fn test_get_downloads_file() {
    let remote = tempfile::tempdir().unwrap();
    let content: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(remote.path().join("data.bin"), &content).unwrap();
    let local = tempfile::tempdir().unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["get data.bin", "quit"]);

    let (_, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert_eq!(fs::read(local.path().join("data.bin")).unwrap(), content);
    assert_eq!(
        &received[2..],
        ["SIZE data.bin", "PASV", "RETR data.bin", "QUIT"]
    );
}

#[test]
fn test_get_missing_file_opens_no_data_channel() {
    let remote = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["get missing.txt", "pwd", "quit"]);

    let (_, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert!(!local.path().join("missing.txt").exists());
    assert_eq!(&received[2..], ["SIZE missing.txt", "PWD", "QUIT"]);
}

#[test]
fn test_get_declined_overwrite_keeps_local_file() {
    let remote = tempfile::tempdir().unwrap();
    fs::write(remote.path().join("a.txt"), b"remote").unwrap();
    let local = tempfile::tempdir().unwrap();
    fs::write(local.path().join("a.txt"), b"local").unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["get a.txt", "quit"]).with_confirmations(&[false]);

    let (_, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert_eq!(console.confirm_calls, 1);
    assert_eq!(fs::read(local.path().join("a.txt")).unwrap(), b"local");
    assert_eq!(&received[2..], ["SIZE a.txt", "QUIT"]);
}

#[test]
fn test_put_uploads_file() {
    let remote = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    let content = vec![7u8; 10_000];
    fs::write(local.path().join("up.bin"), &content).unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["put up.bin", "quit"]);

    let (_, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert_eq!(fs::read(remote.path().join("up.bin")).unwrap(), content);
    assert_eq!(
        &received[2..],
        ["PASV", "SIZE up.bin", "STOR up.bin", "QUIT"]
    );
}

#[test]
fn test_put_confirmed_overwrite_replaces_remote_file() {
    let remote = tempfile::tempdir().unwrap();
    fs::write(remote.path().join("up.txt"), b"old").unwrap();
    let local = tempfile::tempdir().unwrap();
    fs::write(local.path().join("up.txt"), b"new contents").unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["put up.txt", "quit"]).with_confirmations(&[true]);

    run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert_eq!(console.confirm_calls, 1);
    assert_eq!(fs::read(remote.path().join("up.txt")).unwrap(), b"new contents");
}

#[test]
fn test_cd_then_get_from_subdirectory() {
    let remote = tempfile::tempdir().unwrap();
    fs::create_dir(remote.path().join("pub")).unwrap();
    fs::write(remote.path().join("pub/readme.txt"), b"read me").unwrap();
    let local = tempfile::tempdir().unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["cd nowhere", "cd pub", "get readme.txt", "quit"]);

    let (_, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert_eq!(fs::read(local.path().join("readme.txt")).unwrap(), b"read me");
    assert_eq!(received[2], "CWD nowhere");
    assert_eq!(received[3], "CWD pub");
}

#[test]
fn test_local_commands_send_nothing() {
    let remote = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    fs::create_dir(local.path().join("inbox")).unwrap();
    let server = MockServer::start(remote.path());
    let mut console = login_then(&["!ls", "!cd inbox", "!pwd", "help", "bogus", "put"]);

    let (out, received) = run_session(server, ClientConfig::default(), local.path(), &mut console);

    assert!(out.contains("inbox/"));
    assert!(out.contains("Illegal command"));
    assert!(out.contains("Usage: put <filename>"));
    // End of input closes the session without QUIT.
    assert_eq!(received, vec!["USER alice", "PASS secret"]);
}

#[test]
fn test_multi_line_framing_reads_split_greeting() {
    let remote = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    let server = MockServer::with_greeting(
        remote.path(),
        &["220-Welcome to the mock server\r\n", "220 Ready\r\n"],
    );
    let config = ClientConfig {
        response_framing: ResponseFraming::MultiLine,
        ..ClientConfig::default()
    };
    let mut console = login_then(&["pwd", "quit"]);

    let (_, received) = run_session(server, config, local.path(), &mut console);

    assert_eq!(received, vec!["USER alice", "PASS secret", "PWD", "QUIT"]);
}
