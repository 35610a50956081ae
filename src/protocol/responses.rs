//! FTP Response handling
//!
//! Defines FTP response codes and the parsed form of a server reply.

use std::fmt;

use crate::error::ControlError;

/// Standard FTP response codes
pub const CLOSING_CONTROL: u16 = 221;
pub const TRANSFER_COMPLETE: u16 = 226;
pub const ENTERING_PASSIVE: u16 = 227;
pub const LOGIN_SUCCESS: u16 = 230;
pub const FILE_SIZE: u16 = 213;
pub const PASSWORD_REQUIRED: u16 = 331;
pub const FILE_NOT_FOUND: u16 = 550;

/// A server reply: the three-digit code plus the text that came with it.
///
/// `raw` holds everything returned by one read of the response reader, so it
/// may carry more than one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    code: u16,
    raw: String,
}

impl Response {
    /// Parses a reply. The first three bytes must be ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, ControlError> {
        let bytes = raw.as_bytes();
        if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
            return Err(ControlError::MalformedResponse(raw.to_string()));
        }
        let code = bytes[..3]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));

        Ok(Self {
            code,
            raw: raw.to_string(),
        })
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// Text of the first line after the code and separator.
    pub fn message(&self) -> &str {
        let first_line = self.raw.lines().next().unwrap_or("");
        first_line
            .get(3..)
            .unwrap_or("")
            .trim_start_matches(['-', ' '])
            .trim_end()
    }

    /// 1xx: the action was started, expect another reply.
    pub fn is_preliminary(&self) -> bool {
        (100..200).contains(&self.code)
    }

    /// 2xx
    pub fn is_completion(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// 3xx: more input is needed.
    pub fn is_intermediate(&self) -> bool {
        (300..400).contains(&self.code)
    }

    /// 4xx and 5xx
    pub fn is_negative(&self) -> bool {
        self.code >= 400
    }

    /// A second reply delivered in the same read, such as a `226` arriving
    /// together with the `150` that announced the transfer.
    pub fn trailing_reply(&self) -> Option<Response> {
        let first_end = self.raw.find('\n')? + 1;
        let rest = &self.raw[first_end..];
        let own_code = &self.raw.as_bytes()[..3];

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            let bytes = line.as_bytes();
            let starts_reply = bytes.len() >= 4
                && bytes[..3].iter().all(u8::is_ascii_digit)
                && (bytes[3] == b' ' || bytes[3] == b'-');
            if starts_reply && &bytes[..3] != own_code {
                return Response::parse(&rest[offset..]).ok();
            }
            offset += line.len();
        }
        None
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw.trim_end())
    }
}
