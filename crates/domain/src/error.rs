//! Error types for the domain layer
//!
//! Each error is a `thiserror` enum so adapters and the UI can match on the
//! failure instead of parsing strings.

use thiserror::Error;

use crate::chat::ScreenKind;

/// A role tag that is neither `brand` nor `influencer`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

/// Rejected login or registration input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email is not of the `local@domain.tld` shape, or the password is empty
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration form failed a shape check
    #[error("Registration failed: {0}")]
    InvalidRegistration(&'static str),
}

/// A conversation action that the current screen does not offer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Action `{action}` is not available on the {screen:?} screen")]
    ActionNotAvailable {
        action: &'static str,
        screen: ScreenKind,
    },

    #[error("Topic `{0}` is not offered on this screen")]
    UnknownTopic(String),
}

impl ChatError {
    pub fn not_available(action: &'static str, screen: ScreenKind) -> Self {
        Self::ActionNotAvailable { action, screen }
    }
}
