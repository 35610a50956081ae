//! Authentication
//!
//! USER/PASS login against the server.

pub mod handshake;
pub mod results;

pub use handshake::authenticate;
pub use results::LoginOutcome;
