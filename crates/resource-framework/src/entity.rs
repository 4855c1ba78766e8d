//! # RemoteEntity Trait
//!
//! The `RemoteEntity` trait describes a resource owned by a downstream HTTP+JSON service
//! (a product, an address-book entry, an order, a user). The framework never stores these
//! entities; it only knows how to address them by id and how to move them over the wire.
//!
//! Associated types keep the payloads apart: an order is created from an `OrderRequest`,
//! not from an `OrderRecord`, and the compiler rejects the wrong one.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any downstream resource must implement to be reached through a [`Resource`](crate::Resource).
pub trait RemoteEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier used as the last path segment (`{base}/{id}`).
    /// Convertible from u32 so routes can build it from a numeric path segment.
    type Id: Clone + Debug + Display + From<u32> + Send + Sync + 'static;

    /// Body POSTed to the collection to create a new instance.
    type Create: Serialize + Debug + Send + Sync;

    /// Body PUT to `{base}/{id}`.
    type Update: Serialize + Debug + Send + Sync;

    /// Short resource name used in logs and error messages.
    const RESOURCE: &'static str;
}
