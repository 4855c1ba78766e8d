//! # Resource Capability
//!
//! One trait for every downstream collection. The HTTP implementation lives in
//! [`crate::http`]; tests swap in [`crate::mock::MockResource`].

use crate::entity::RemoteEntity;
use crate::error::ClientResult;
use async_trait::async_trait;

/// Uniform access to a downstream collection of `T`.
///
/// Absence is reported as a value (`None` / `false`), transport failures as
/// [`ClientError`](crate::ClientError).
#[async_trait]
pub trait Resource<T: RemoteEntity>: Send + Sync {
    /// GET `{base}/{id}`.
    async fn get(&self, id: &T::Id) -> ClientResult<Option<T>>;

    /// GET `{base}`.
    async fn list(&self) -> ClientResult<Option<Vec<T>>>;

    /// GET `{base}/{scope}/{key}`, e.g. `orders/user/7`.
    async fn list_by(&self, scope: &str, key: &str) -> ClientResult<Option<Vec<T>>>;

    /// POST `{base}`.
    async fn create(&self, params: &T::Create) -> ClientResult<Option<T>>;

    /// POST `{base}/{action}` with an arbitrary JSON body, e.g. `users/login`.
    async fn invoke(&self, action: &str, body: serde_json::Value) -> ClientResult<Option<T>>;

    /// PUT `{base}/{id}`. `true` when the downstream answered 2xx.
    async fn update(&self, id: &T::Id, update: &T::Update) -> ClientResult<bool>;

    /// DELETE `{base}/{id}`. `true` when the downstream answered 2xx.
    async fn delete(&self, id: &T::Id) -> ClientResult<bool>;
}
