//! # Catalog Services
//!
//! Products and address books have no composition logic: the gateway forwards CRUD calls
//! and turns absence into errors. One generic service covers both.

pub mod error;

pub use error::*;

use crate::clients::{AddressClient, ProductClient};
use resource_framework::{EntityClient, RemoteEntity};
use tracing::{info, instrument};

pub type IdOf<C> = <<C as EntityClient>::Entity as RemoteEntity>::Id;
pub type CreateOf<C> = <<C as EntityClient>::Entity as RemoteEntity>::Create;
pub type UpdateOf<C> = <<C as EntityClient>::Entity as RemoteEntity>::Update;

pub type ProductService = CatalogService<ProductClient>;
pub type AddressBookService = CatalogService<AddressClient>;

/// CRUD pass-through over one downstream collection.
#[derive(Clone)]
pub struct CatalogService<C> {
    client: C,
}

impl<C: EntityClient> CatalogService<C> {
    const RESOURCE: &'static str = <C::Entity as RemoteEntity>::RESOURCE;

    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[instrument(skip(self), fields(resource = Self::RESOURCE))]
    pub async fn get_all(&self) -> Result<Vec<C::Entity>, CatalogError> {
        self.client
            .list()
            .await?
            .ok_or(CatalogError::ListNotFound(Self::RESOURCE))
    }

    #[instrument(skip(self), fields(resource = Self::RESOURCE))]
    pub async fn get_by_id(&self, id: IdOf<C>) -> Result<C::Entity, CatalogError> {
        self.client
            .get(&id)
            .await?
            .ok_or_else(|| CatalogError::NotFound {
                resource: Self::RESOURCE,
                id: id.to_string(),
            })
    }

    #[instrument(skip(self), fields(resource = Self::RESOURCE))]
    pub async fn add(&self, params: CreateOf<C>) -> Result<C::Entity, CatalogError> {
        let created = self
            .client
            .create(&params)
            .await?
            .ok_or(CatalogError::CreationFailed(Self::RESOURCE))?;
        info!(resource = Self::RESOURCE, "Created");
        Ok(created)
    }

    #[instrument(skip(self, update), fields(resource = Self::RESOURCE))]
    pub async fn update(&self, id: IdOf<C>, update: UpdateOf<C>) -> Result<bool, CatalogError> {
        Ok(self.client.update(&id, &update).await?)
    }

    #[instrument(skip(self), fields(resource = Self::RESOURCE))]
    pub async fn delete(&self, id: IdOf<C>) -> Result<bool, CatalogError> {
        Ok(self.client.delete(&id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductDetails, ProductId};
    use resource_framework::mock::{MockResource, Operation};

    fn product(id: u32) -> ProductDetails {
        ProductDetails {
            id: ProductId(id),
            category_id: 1,
            name: format!("Canvas {id}"),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_get_by_id_turns_absence_into_not_found() {
        let mock = MockResource::<ProductDetails>::new();
        mock.expect_get(ProductId(1)).return_ok(Some(product(1)));
        let service = ProductService::new(ProductClient::new(mock.client()));

        assert_eq!(service.get_by_id(ProductId(1)).await, Ok(product(1)));
        assert_eq!(
            service.get_by_id(ProductId(2)).await,
            Err(CatalogError::NotFound {
                resource: "product",
                id: "2".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_add_requires_a_confirmed_entity() {
        let mock = MockResource::<ProductDetails>::new();
        let service = ProductService::new(ProductClient::new(mock.client()));

        let result = service.add(product(0)).await;

        assert_eq!(result, Err(CatalogError::CreationFailed("product")));
        assert_eq!(mock.calls(Operation::Create), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_pass_the_verdict_through() {
        let mock = MockResource::<ProductDetails>::new();
        mock.expect_update().return_ok(true);
        let service = ProductService::new(ProductClient::new(mock.client()));

        assert_eq!(service.update(ProductId(1), product(1)).await, Ok(true));
        assert_eq!(service.delete(ProductId(1)).await, Ok(false));
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_downstream_message() {
        let mock = MockResource::<ProductDetails>::new();
        mock.expect_list().return_err(502, "bad gateway");
        let service = ProductService::new(ProductClient::new(mock.client()));

        let result = service.get_all().await;

        assert_eq!(result, Err(CatalogError::Transport("bad gateway".to_string())));
    }
}
