//! Error types for registration and login.

use crate::session::TokenError;
use resource_framework::ClientError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// Required fields are missing or empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The users service knows no user with these credentials.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The users service accepted the registration but returned nothing.
    #[error("User creation failed: empty response")]
    CreationFailed,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// A downstream call failed; carries the downstream's message.
    #[error("Downstream error: {0}")]
    Transport(String),
}

impl From<ClientError> for UserError {
    fn from(e: ClientError) -> Self {
        UserError::Transport(e.to_string())
    }
}
