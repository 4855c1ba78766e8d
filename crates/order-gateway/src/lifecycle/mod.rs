//! # Lifecycle
//!
//! Wiring and running the gateway:
//!
//! 1. [`setup_tracing`] installs the subscriber once, before anything logs.
//! 2. [`Gateway::new`] builds the shared `reqwest::Client`, one [`HttpResource`](resource_framework::HttpResource)
//!    per downstream base URL, the typed clients on top, and the services on top of those.
//! 3. [`Gateway::serve`] runs the axum server until ctrl-c and shuts down gracefully.
//!
//! Nothing is spawned at construction time: downstream calls happen per request and
//! the only long-lived state is the session registry.

pub mod gateway;
pub mod tracing;

pub use self::gateway::*;
pub use self::tracing::*;
