//! Typed clients for the downstream services, each a thin wrapper over a shared
//! [`Resource`](resource_framework::Resource) handle.

pub mod address_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use address_client::AddressClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
