//! Gateway configuration, read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ORDERS_URL` | `http://localhost:5001/api/v1/orders` |
//! | `PRODUCTS_URL` | `http://localhost:5002/api/v1/products` |
//! | `USERS_URL` | `http://localhost:5003/api/v1/users` |
//! | `ADDRESS_BOOKS_URL` | `http://localhost:5004/api/v1/address-books` |
//! | `HTTP_PORT` | `8080` |
//! | `JWT_SECRET` | development secret (logged as a warning) |
//! | `JWT_ISSUER` | `photosi` |
//! | `TOKEN_TTL_HOURS` | `24` |

use tracing::warn;

const DEV_JWT_SECRET: &str = "dev-only-secret-change-me";

#[derive(Debug, Clone)]
pub struct Config {
    pub orders_url: String,
    pub products_url: String,
    pub users_url: String,
    pub address_books_url: String,
    pub http_port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source. Unparsable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET not set, using development secret");
            DEV_JWT_SECRET.to_string()
        });

        Self {
            orders_url: string("ORDERS_URL", "http://localhost:5001/api/v1/orders"),
            products_url: string("PRODUCTS_URL", "http://localhost:5002/api/v1/products"),
            users_url: string("USERS_URL", "http://localhost:5003/api/v1/users"),
            address_books_url: string(
                "ADDRESS_BOOKS_URL",
                "http://localhost:5004/api/v1/address-books",
            ),
            http_port: lookup("HTTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            jwt_secret,
            jwt_issuer: string("JWT_ISSUER", "photosi"),
            token_ttl_hours: lookup("TOKEN_TTL_HOURS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.jwt_issuer, "photosi");
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
        assert!(config.orders_url.ends_with("/api/v1/orders"));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("ORDERS_URL", "http://orders:80/api/v1/orders"),
            ("HTTP_PORT", "9090"),
            ("JWT_SECRET", "s3cret"),
            ("TOKEN_TTL_HOURS", "2"),
        ]);

        assert_eq!(config.orders_url, "http://orders:80/api/v1/orders");
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.token_ttl_hours, 2);
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = config(&[("HTTP_PORT", "eighty"), ("TOKEN_TTL_HOURS", "")]);

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.token_ttl_hours, 24);
    }
}
