//! Error types for order composition.

use crate::model::{AddressId, OrderId, ProductId, UserId};
use resource_framework::ClientError;
use thiserror::Error;
use tokio::task::JoinError;

/// Errors that can occur while validating or composing orders.
///
/// Only one failure ever surfaces per operation: the first one observed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order does not exist downstream.
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    /// The orders service returned no collection for the user.
    #[error("Orders for user {0} not found")]
    OrdersNotFound(UserId),

    /// A line item references a product that does not exist.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// The order references an address-book entry that does not exist.
    #[error("Address {0} not found")]
    AddressNotFound(AddressId),

    /// The orders service accepted the order but returned nothing.
    #[error("Order creation failed: empty response from order store")]
    OrderCreationFailed,

    /// A downstream call failed; carries the downstream's message.
    #[error("Downstream error: {0}")]
    Transport(String),

    /// A lookup task panicked or was cancelled by the runtime.
    #[error("Lookup task failed: {0}")]
    TaskFailed(String),
}

impl From<ClientError> for OrderError {
    fn from(e: ClientError) -> Self {
        OrderError::Transport(e.to_string())
    }
}

impl From<JoinError> for OrderError {
    fn from(e: JoinError) -> Self {
        OrderError::TaskFailed(e.to_string())
    }
}
