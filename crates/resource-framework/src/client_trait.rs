//! # EntityClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default CRUD methods
//! built on top of a shared [`Resource`] handle.
use crate::{ClientResult, RemoteEntity, Resource};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// A domain client only has to hand out its inner resource; `get`, `list`, `create`,
/// `update` and `delete` come for free and are traced uniformly.
///
/// # Example
///
/// ```rust
/// use resource_framework::{EntityClient, RemoteEntity, Resource};
/// use resource_framework::mock::MockResource;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Category { id: u32, name: String }
///
/// impl RemoteEntity for Category {
///     type Id = u32;
///     type Create = Category;
///     type Update = Category;
///     const RESOURCE: &'static str = "category";
/// }
///
/// struct CategoryClient {
///     inner: Arc<dyn Resource<Category>>,
/// }
///
/// impl EntityClient for CategoryClient {
///     type Entity = Category;
///
///     fn inner(&self) -> &dyn Resource<Category> {
///         self.inner.as_ref()
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mock = MockResource::<Category>::new();
///     let client = CategoryClient { inner: mock.client() };
///
///     // get() and delete() are provided automatically
///     assert!(client.get(&1).await.unwrap().is_none());
///     assert!(!client.delete(&1).await.unwrap());
/// }
/// ```
#[async_trait]
pub trait EntityClient: Send + Sync {
    /// The downstream entity this client addresses.
    type Entity: RemoteEntity;

    /// Access the inner resource handle.
    fn inner(&self) -> &dyn Resource<Self::Entity>;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self), fields(resource = <Self::Entity as RemoteEntity>::RESOURCE))]
    async fn get(
        &self,
        id: &<Self::Entity as RemoteEntity>::Id,
    ) -> ClientResult<Option<Self::Entity>> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self), fields(resource = <Self::Entity as RemoteEntity>::RESOURCE))]
    async fn list(&self) -> ClientResult<Option<Vec<Self::Entity>>> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }

    /// Create an entity; `None` when the downstream confirmed nothing.
    #[tracing::instrument(skip(self), fields(resource = <Self::Entity as RemoteEntity>::RESOURCE))]
    async fn create(
        &self,
        params: &<Self::Entity as RemoteEntity>::Create,
    ) -> ClientResult<Option<Self::Entity>> {
        tracing::debug!("Sending request");
        self.inner().create(params).await
    }

    /// Replace an entity by ID.
    #[tracing::instrument(skip(self, update), fields(resource = <Self::Entity as RemoteEntity>::RESOURCE))]
    async fn update(
        &self,
        id: &<Self::Entity as RemoteEntity>::Id,
        update: &<Self::Entity as RemoteEntity>::Update,
    ) -> ClientResult<bool> {
        tracing::debug!("Sending request");
        self.inner().update(id, update).await
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self), fields(resource = <Self::Entity as RemoteEntity>::RESOURCE))]
    async fn delete(&self, id: &<Self::Entity as RemoteEntity>::Id) -> ClientResult<bool> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
