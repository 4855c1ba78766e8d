//! # Sessions
//!
//! Logged-in users are tracked by an injected [`SessionStore`] keyed by the bearer token
//! they were issued. Tokens themselves are JWTs signed by [`TokenService`].

pub mod store;
pub mod token;

pub use store::*;
pub use token::*;
