//! # Client Errors
//!
//! Errors raised while talking to a downstream service. Business-level absence
//! ("no such product") is not an error here: it is `Ok(None)` or `Ok(false)`.

/// Errors that can occur on a downstream call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The downstream answered with a non-success status.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// The request never completed (connection refused, reset, invalid URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The downstream answered 200 with a body that does not match the entity.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Status code of the downstream response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
