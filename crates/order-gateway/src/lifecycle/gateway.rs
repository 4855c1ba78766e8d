use crate::api::{self, AppState};
use crate::clients::{AddressClient, OrderClient, ProductClient, UserClient};
use crate::config::Config;
use crate::model::{AddressBookEntry, OrderRecord, ProductDetails, User};
use crate::session::{InMemorySessionStore, TokenService};
use axum::Router;
use resource_framework::HttpResource;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// The running backend-for-frontend: downstream clients, services and sessions.
pub struct Gateway {
    state: AppState,
}

impl Gateway {
    /// Builds one shared connection pool and a resource per downstream service.
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("order-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let orders = OrderClient::new(Arc::new(HttpResource::<OrderRecord>::new(
            http.clone(),
            config.orders_url.as_str(),
        )));
        let products = ProductClient::new(Arc::new(HttpResource::<ProductDetails>::new(
            http.clone(),
            config.products_url.as_str(),
        )));
        let addresses = AddressClient::new(Arc::new(HttpResource::<AddressBookEntry>::new(
            http.clone(),
            config.address_books_url.as_str(),
        )));
        let users = UserClient::new(Arc::new(HttpResource::<User>::new(
            http,
            config.users_url.as_str(),
        )));

        let tokens = TokenService::new(
            &config.jwt_secret,
            config.jwt_issuer.clone(),
            config.token_ttl_hours,
        );
        let state = AppState::new(
            orders,
            products,
            addresses,
            users,
            Arc::new(InMemorySessionStore::new()),
            tokens,
        );

        info!(
            orders = %config.orders_url,
            products = %config.products_url,
            users = %config.users_url,
            address_books = %config.address_books_url,
            "Gateway wired"
        );
        Ok(Self { state })
    }

    pub fn router(&self) -> Router {
        api::router(self.state.clone())
    }

    /// Serves until ctrl-c, then drains in-flight requests.
    pub async fn serve(self, listener: TcpListener) -> Result<(), GatewayError> {
        let addr = listener.local_addr()?;
        info!(%addr, "Gateway listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Gateway stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
