//! # Resource Framework
//!
//! Building blocks for talking to a fleet of HTTP+JSON downstream services through one
//! typed abstraction, and for composing many such calls concurrently.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`RemoteEntity`]) - what a downstream collection holds and how it is addressed
//! 2. **Transport Layer** ([`Resource`], [`HttpResource`]) - one parametrized client for every collection
//! 3. **Interface Layer** ([`EntityClient`]) - domain clients with uniform, traced CRUD methods
//!
//! Instead of one hand-written HTTP client per downstream, every collection is an
//! `HttpResource<T>` built from a base URL and an entity type. Domain code depends on
//! `Arc<dyn Resource<T>>`, so tests swap in a [`mock::MockResource`] without touching it.
//!
//! ## Status-code interpretation
//!
//! | Call | 200 | other 2xx | non-2xx |
//! |------|-----|-----------|---------|
//! | `get` / `list` / `list_by` | `Some(decoded)` | `None` | [`ClientError::Status`] |
//! | `create` / `invoke` | `Some(decoded)`, `None` on empty or `null` body | same | [`ClientError::Status`] |
//! | `update` / `delete` | `true` | `true` | `false` |
//!
//! Connection failures and undecodable bodies are always errors.
//!
//! ## Concurrency Model
//!
//! [`fanout::try_join_ordered`] spawns one task per lookup, joins them all-or-nothing and
//! restores input order. The first failure wins; siblings still in flight are detached
//! and finish on their own.
//!
//! ## Testing
//!
//! See the [`mock`] module for scripted replies, artificial latency and call counting.

pub mod client_trait;
pub mod entity;
pub mod error;
pub mod fanout;
pub mod http;
pub mod mock;
pub mod resource;

// Re-export core types for convenience
pub use client_trait::EntityClient;
pub use entity::RemoteEntity;
pub use error::{ClientError, ClientResult};
pub use fanout::try_join_ordered;
pub use http::HttpResource;
pub use resource::Resource;
