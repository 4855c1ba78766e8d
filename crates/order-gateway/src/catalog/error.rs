use resource_framework::ClientError;
use thiserror::Error;

/// Errors raised by the pass-through catalog services (products, address books).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No entity with the requested id.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// The downstream returned no collection.
    #[error("No {0} entries found")]
    ListNotFound(&'static str),

    /// The downstream accepted the entity but returned nothing.
    #[error("{0} creation failed: empty response")]
    CreationFailed(&'static str),

    /// A downstream call failed; carries the downstream's message.
    #[error("Downstream error: {0}")]
    Transport(String),
}

impl From<ClientError> for CatalogError {
    fn from(e: ClientError) -> Self {
        CatalogError::Transport(e.to_string())
    }
}
