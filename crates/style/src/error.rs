//! Style error types

use thiserror::Error;

/// Style operation result type
pub type StyleResult<T> = Result<T, StyleError>;

/// Style errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Unknown {attribute} token: {token}")]
    UnknownToken {
        /// Attribute the token was offered for
        attribute: &'static str,
        /// The rejected token
        token: String,
    },
}

impl StyleError {
    pub fn unknown(attribute: &'static str, token: &str) -> Self {
        Self::UnknownToken {
            attribute,
            token: token.to_string(),
        }
    }
}
