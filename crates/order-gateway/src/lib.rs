//! # Order Gateway
//!
//! A backend-for-frontend over the users, products, orders and address-books services.
//!
//! - **[model]**: wire types ([`OrderRecord`](model::OrderRecord), [`CompositeOrder`](model::CompositeOrder), ...).
//! - **[clients]**: typed downstream clients built on [`resource_framework`].
//! - **[order_service]**: the order composition engine.
//! - **[catalog]** and **[user_service]**: pass-through services.
//! - **[session]**: session registry and JWT handling.
//! - **[api]**: the axum routes and auth middleware.
//! - **[lifecycle]**: wiring, tracing and serving.
//!
//! See [`resource_framework::mock`] for testing services without any downstream.

pub mod api;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_service;
pub mod session;
pub mod user_service;
