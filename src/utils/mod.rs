//! Utility functions
//!
//! Provides network and input validation helpers.

pub mod network;
pub mod validation;
