//! # Order Composition
//!
//! [`OrderService`] validates orders against the products and address-books services and
//! assembles [`CompositeOrder`] views.
//!
//! ## Ordering of lookups
//!
//! | Operation | Products | Address |
//! |-----------|----------|---------|
//! | `get_by_id` / `get_all_for_user` | concurrent fan-out | concurrent with the product fan-out |
//! | `add` / `update` | concurrent fan-out | only after every product check succeeded |
//!
//! Reads start the address lookup alongside the products, so it is issued exactly once
//! whatever the products turn out to be. Writes report product errors before address
//! errors when both are invalid.
//!
//! ## Failure policy
//!
//! Every lookup runs on its own task (see [`resource_framework::fanout`]). The first
//! failure aborts the operation; siblings are left to finish and their results are
//! dropped. No partial [`CompositeOrder`] is ever returned.
//!
//! `update` and `delete` report a refused write as `Ok(false)`, while `add` reports an
//! empty create response as [`OrderError::OrderCreationFailed`].

pub mod error;

pub use error::*;

use crate::clients::{AddressClient, OrderClient, ProductClient};
use crate::model::{
    AddressBookEntry, AddressId, CompositeLineItem, CompositeOrder, LineItem, OrderId, OrderRecord,
    OrderRequest, UserId,
};
use resource_framework::{fanout, EntityClient};
use tracing::{debug, info, instrument, warn};

/// Stateless orchestration over the orders, products and address-books services.
#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    products: ProductClient,
    addresses: AddressClient,
}

impl OrderService {
    pub fn new(orders: OrderClient, products: ProductClient, addresses: AddressClient) -> Self {
        Self {
            orders,
            products,
            addresses,
        }
    }

    /// Fetches an order and composes it with its products and address.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: OrderId) -> Result<CompositeOrder, OrderError> {
        let order = self
            .orders
            .get(&id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))?;

        let composed = self.compose(order).await.inspect_err(|e| {
            warn!(order_id = %id, error = %e, "Order composition failed");
        })?;
        info!(order_id = %id, line_items = composed.line_items.len(), "Order composed");
        Ok(composed)
    }

    /// Composes every order of a user. All lookups of all orders share one failure domain.
    #[instrument(skip(self))]
    pub async fn get_all_for_user(&self, user_id: UserId) -> Result<Vec<CompositeOrder>, OrderError> {
        let orders = self
            .orders
            .list_for_user(user_id)
            .await?
            .ok_or(OrderError::OrdersNotFound(user_id))?;
        debug!(count = orders.len(), "Composing orders");

        let compositions: Vec<_> = orders
            .into_iter()
            .map(|order| {
                let service = self.clone();
                async move { service.compose(order).await }
            })
            .collect();
        let composed = fanout::try_join_ordered(compositions).await?;

        info!(%user_id, count = composed.len(), "Orders composed");
        Ok(composed)
    }

    /// Validates and submits a new order, returning the record confirmed by the store.
    #[instrument(skip(self, request), fields(order_code = request.order_code))]
    pub async fn add(&self, request: OrderRequest) -> Result<OrderRecord, OrderError> {
        self.validate(&request).await?;

        let created = self
            .orders
            .create(&request)
            .await?
            .ok_or(OrderError::OrderCreationFailed)?;
        info!(order_id = %created.id, "Order created");
        Ok(created)
    }

    /// Validates and replaces an existing order. `Ok(false)` when the store refused the write.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: OrderId, request: OrderRequest) -> Result<bool, OrderError> {
        if self.orders.get(&id).await?.is_none() {
            return Err(OrderError::OrderNotFound(id));
        }
        self.validate(&request).await?;

        let updated = self.orders.update(&id, &request).await?;
        info!(order_id = %id, updated, "Order update submitted");
        Ok(updated)
    }

    /// Deletes an order. No existence check; the store's verdict is returned as is.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: OrderId) -> Result<bool, OrderError> {
        let deleted = self.orders.delete(&id).await?;
        info!(order_id = %id, deleted, "Order delete submitted");
        Ok(deleted)
    }

    async fn compose(&self, order: OrderRecord) -> Result<CompositeOrder, OrderError> {
        // Spawned first so it is issued even if the product fan-out fails fast.
        let address_lookup = tokio::spawn(find_address(self.addresses.clone(), order.address_id));

        let (line_items, address) = tokio::try_join!(
            self.find_products(&order.line_items),
            async move { address_lookup.await? }
        )?;

        Ok(CompositeOrder {
            id: order.id,
            order_code: order.order_code,
            user_id: order.user_id,
            address,
            line_items,
        })
    }

    async fn validate(&self, request: &OrderRequest) -> Result<(), OrderError> {
        self.find_products(&request.line_items).await?;
        find_address(self.addresses.clone(), request.address_id).await?;
        Ok(())
    }

    /// One lookup per line item, joined all-or-nothing, in line-item order.
    async fn find_products(&self, items: &[LineItem]) -> Result<Vec<CompositeLineItem>, OrderError> {
        let lookups: Vec<_> = items
            .iter()
            .copied()
            .map(|item| {
                let products = self.products.clone();
                async move {
                    products
                        .get_with_quantity(&item)
                        .await?
                        .ok_or(OrderError::ProductNotFound(item.product_id))
                }
            })
            .collect();
        fanout::try_join_ordered(lookups).await
    }
}

async fn find_address(addresses: AddressClient, id: AddressId) -> Result<AddressBookEntry, OrderError> {
    addresses
        .get(&id)
        .await?
        .ok_or(OrderError::AddressNotFound(id))
}
