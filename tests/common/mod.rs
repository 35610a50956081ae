//! Scripted FTP server and console for end-to-end client tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rax_ftp_client::client::Console;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

#[path = "../../src/testing/console.rs"]
mod console;
pub use console::ScriptedConsole;

pub const USER: &str = "alice";
pub const PASSWORD: &str = "secret";

/// A single-session FTP server serving files from `root`.
pub struct MockServer {
    pub addr: SocketAddr,
    handle: JoinHandle<Vec<String>>,
}

impl MockServer {
    pub fn start(root: &Path) -> Self {
        Self::with_greeting(root, &["220 Welcome to the mock server\r\n"])
    }

    /// Sends the greeting in separate writes, pausing between them.
    pub fn with_greeting(root: &Path, greeting: &[&'static str]) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();
        let root = root.to_path_buf();
        let greeting = greeting.to_vec();

        let handle = thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = TcpListener::from_std(listener).unwrap();
                let (stream, _) = listener.accept().await.unwrap();
                serve(stream, root, greeting).await
            })
        });

        Self { addr, handle }
    }

    /// Waits for the session to end and returns every command received.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

async fn serve(stream: TcpStream, root: PathBuf, greeting: Vec<&'static str>) -> Vec<String> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut received = Vec::new();
    let mut cwd = PathBuf::from("/");
    let mut passive: Option<TcpListener> = None;

    for (i, part) in greeting.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        write_half.write_all(part.as_bytes()).await.unwrap();
    }

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
            break;
        }
        let command = line.trim_end_matches("\r\n").to_string();
        received.push(command.clone());

        let (verb, arg) = match command.split_once(' ') {
            Some((verb, arg)) => (verb.to_string(), arg.to_string()),
            None => (command.clone(), String::new()),
        };
        let dir = root.join(cwd.strip_prefix("/").unwrap());

        let response = match verb.as_str() {
            "USER" if arg == USER => "331 Please specify the password.".to_string(),
            "USER" => "530 Unknown user.".to_string(),
            "PASS" if arg == PASSWORD => "230 Login successful.".to_string(),
            "PASS" => "530 Login incorrect.".to_string(),
            "PWD" => format!("257 \"{}\" is the current directory", cwd.display()),
            "CWD" => {
                let target = cwd.join(&arg);
                if root.join(target.strip_prefix("/").unwrap()).is_dir() {
                    cwd = target;
                    "250 Directory successfully changed.".to_string()
                } else {
                    "550 Failed to change directory.".to_string()
                }
            }
            "PASV" => {
                let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                let port = listener.local_addr().unwrap().port();
                passive = Some(listener);
                format!(
                    "227 Entering Passive Mode (127,0,0,1,{},{}).",
                    port / 256,
                    port % 256
                )
            }
            "SIZE" => match std::fs::metadata(dir.join(&arg)) {
                Ok(meta) if meta.is_file() => format!("213 {}", meta.len()),
                _ => "550 Could not get file size.".to_string(),
            },
            "LIST" => {
                let mut names: Vec<String> = std::fs::read_dir(&dir)
                    .unwrap()
                    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                    .collect();
                names.sort();
                let listing: String = names.iter().map(|n| format!("{}\r\n", n)).collect();
                let data = accept_data(&mut passive).await;
                reply(&mut write_half, "150 Here comes the directory listing.").await;
                send_and_wait_close(data, listing.as_bytes()).await;
                "226 Directory send OK.".to_string()
            }
            "RETR" => {
                let content = std::fs::read(dir.join(&arg)).unwrap();
                let data = accept_data(&mut passive).await;
                reply(&mut write_half, "150 Opening BINARY mode data connection.").await;
                send_and_wait_close(data, &content).await;
                "226 Transfer complete.".to_string()
            }
            "STOR" => {
                let mut data = accept_data(&mut passive).await;
                reply(&mut write_half, "150 Ok to send data.").await;
                let mut content = Vec::new();
                data.read_to_end(&mut content).await.unwrap();
                std::fs::write(dir.join(&arg), content).unwrap();
                "226 Transfer complete.".to_string()
            }
            "QUIT" => {
                reply(&mut write_half, "221 Goodbye.").await;
                break;
            }
            _ => "502 Command not implemented.".to_string(),
        };
        reply(&mut write_half, &response).await;
    }

    received
}

async fn reply(write_half: &mut tokio::net::tcp::OwnedWriteHalf, text: &str) {
    write_half
        .write_all(format!("{}\r\n", text).as_bytes())
        .await
        .unwrap();
}

async fn accept_data(passive: &mut Option<TcpListener>) -> TcpStream {
    let listener = passive.take().expect("transfer without PASV");
    let (stream, _) = listener.accept().await.unwrap();
    stream
}

/// Writes `content` then holds the final reply until the client has closed
/// its end, so the final reply never shares a read with the 150.
async fn send_and_wait_close(mut data: TcpStream, content: &[u8]) {
    data.write_all(content).await.unwrap();
    data.shutdown().await.unwrap();
    let mut rest = Vec::new();
    let _ = data.read_to_end(&mut rest).await;
}
