//! Authentication result types

/// How the login handshake ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    /// The user closed input before the server accepted the login
    InputClosed,
}
