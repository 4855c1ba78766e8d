//! # Tracing Setup
//!
//! Structured logging for the gateway. Every downstream call, fan-out and request
//! carries fields (`resource`, `order_id`, `user_id`) instead of formatted strings.
//!
//! **Usage:**
//! ```bash
//! RUST_LOG=info order-gateway                               # Compact logs
//! RUST_LOG=order_gateway=debug,resource_framework=debug order-gateway   # Every downstream call
//! ```

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "order_gateway=info,resource_framework=info,tower_http=info";

/// Installs the global subscriber. Falls back to `info` for the workspace crates when
/// `RUST_LOG` is unset or invalid.
pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
