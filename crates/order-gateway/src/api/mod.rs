//! # HTTP Surface
//!
//! | Route | Auth | Handler |
//! |-------|------|---------|
//! | `POST /api/v1/users/register` | - | [`users::register`] |
//! | `POST /api/v1/users/login` | - | [`users::login`] |
//! | `GET /api/v1/users/ping` | bearer | [`users::ping`] |
//! | `GET, POST /api/v1/orders` | bearer | orders of the current user, create |
//! | `GET, PUT, DELETE /api/v1/orders/{id}` | bearer | composite read, update, delete |
//! | `/api/v1/products[/{id}]` | bearer | catalog CRUD |
//! | `/api/v1/address-books[/{id}]` | bearer | catalog CRUD |
//!
//! Ids below 1 and incomplete orders are rejected with 400. Everything that fails past
//! validation is a 500 carrying the failure's message.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod orders;
pub mod users;

pub use auth::CurrentUser;
pub use error::ApiError;

use crate::catalog::{AddressBookService, ProductService};
use crate::clients::{AddressClient, OrderClient, ProductClient, UserClient};
use crate::order_service::OrderService;
use crate::session::{SessionStore, TokenService};
use crate::user_service::UserService;
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Services shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
    pub products: ProductService,
    pub address_books: AddressBookService,
    pub users: UserService,
    pub sessions: Arc<dyn SessionStore>,
    pub tokens: TokenService,
}

impl AppState {
    /// Wires the services on top of the downstream clients.
    pub fn new(
        orders: OrderClient,
        products: ProductClient,
        addresses: AddressClient,
        users: UserClient,
        sessions: Arc<dyn SessionStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            orders: OrderService::new(orders, products.clone(), addresses.clone()),
            products: ProductService::new(products),
            address_books: AddressBookService::new(addresses),
            users: UserService::new(users, sessions.clone(), tokens.clone()),
            sessions,
            tokens,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(orders::routes())
        .merge(catalog::routes())
        .route("/api/v1/users/ping", get(users::ping))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    Router::new()
        .route("/api/v1/users/register", post(users::register))
        .route("/api/v1/users/login", post(users::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
