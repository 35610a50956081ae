//! Configuration management for RAX FTP Client
//!
//! Built-in defaults, overridden by an optional TOML file and then by
//! `RAX_FTP_CLIENT_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "config";
const MIN_BUFFER_SIZE: usize = 64;

/// How replies are cut out of the control connection byte stream.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFraming {
    /// One blocking read per reply.
    SingleRead,
    /// RFC 959 line framing with multi-line reply support.
    MultiLine,
}

/// Which address the data channel connects to after PASV.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PasvHostSource {
    /// The peer address of the control connection.
    ControlPeer,
    /// The host octets announced in the PASV reply.
    Reply,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Read buffer for replies and transfer chunks
    pub buffer_size: usize,

    /// Connect timeout for control and data sockets, 0 disables
    pub connect_timeout_secs: u64,

    /// Read timeout for control and data sockets, 0 disables
    pub read_timeout_secs: u64,

    pub response_framing: ResponseFraming,

    pub pasv_host: PasvHostSource,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            buffer_size: 4096,
            connect_timeout_secs: 0,
            read_timeout_secs: 0,
            response_framing: ResponseFraming::SingleRead,
            pasv_host: PasvHostSource::ControlPeer,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `path` (or `config.toml`) with environment overrides.
    ///
    /// A missing default file is not an error; an explicitly named one is.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .set_default("buffer_size", defaults.buffer_size as u64)?
            .set_default("connect_timeout_secs", defaults.connect_timeout_secs)?
            .set_default("read_timeout_secs", defaults.read_timeout_secs)?
            .set_default("response_framing", "single_read")?
            .set_default("pasv_host", "control_peer")?
            .add_source(file)
            .add_source(Environment::with_prefix("RAX_FTP_CLIENT").try_parsing(true))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.buffer_size < MIN_BUFFER_SIZE {
            return Err(config::ConfigError::Message(format!(
                "buffer_size must be at least {} bytes",
                MIN_BUFFER_SIZE
            )));
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        (self.connect_timeout_secs > 0).then(|| Duration::from_secs(self.connect_timeout_secs))
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_secs > 0).then(|| Duration::from_secs(self.read_timeout_secs))
    }
}
