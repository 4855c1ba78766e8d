//! # Product Client
//!
//! Product lookup against the products service, including the "entire product"
//! variant used when composing orders.
use crate::model::{CompositeLineItem, LineItem, ProductDetails};
use resource_framework::{ClientResult, EntityClient, Resource};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProductClient {
    inner: Arc<dyn Resource<ProductDetails>>,
}

impl ProductClient {
    pub fn new(inner: Arc<dyn Resource<ProductDetails>>) -> Self {
        Self { inner }
    }

    /// Fetches the product a line item points at and attaches the requested quantity.
    #[instrument(skip(self), fields(product_id = %item.product_id))]
    pub async fn get_with_quantity(&self, item: &LineItem) -> ClientResult<Option<CompositeLineItem>> {
        let product = self.inner.get(&item.product_id).await?;
        debug!(found = product.is_some(), "Product lookup finished");
        Ok(product.map(|product| CompositeLineItem {
            product,
            quantity: item.quantity,
        }))
    }
}

impl EntityClient for ProductClient {
    type Entity = ProductDetails;

    fn inner(&self) -> &dyn Resource<ProductDetails> {
        self.inner.as_ref()
    }
}
