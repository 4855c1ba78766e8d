//! Orders as stored downstream, and the composite view assembled on read.

use crate::model::{AddressBookEntry, AddressId, OrderId, ProductDetails, ProductId, UserId};
use resource_framework::RemoteEntity;
use serde::{Deserialize, Serialize};

/// One product reference inside an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: u32, quantity: u32) -> Self {
        Self {
            product_id: ProductId(product_id),
            quantity,
        }
    }
}

/// Payload for creating or replacing an order. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub order_code: u32,
    #[serde(default)]
    pub user_id: UserId,
    pub address_id: AddressId,
    #[serde(rename = "orderProducts", alias = "lineItems", default)]
    pub line_items: Vec<LineItem>,
}

/// An order as confirmed by the orders service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: OrderId,
    pub order_code: u32,
    pub user_id: UserId,
    pub address_id: AddressId,
    #[serde(rename = "orderProducts", default)]
    pub line_items: Vec<LineItem>,
}

impl RemoteEntity for OrderRecord {
    type Id = OrderId;
    type Create = OrderRequest;
    type Update = OrderRequest;
    const RESOURCE: &'static str = "order";
}

/// A product with the quantity requested by the order stitched in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeLineItem {
    pub product: ProductDetails,
    pub quantity: u32,
}

/// The denormalized order returned to callers. Built fresh on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeOrder {
    pub id: OrderId,
    pub order_code: u32,
    pub user_id: UserId,
    pub address: AddressBookEntry,
    pub line_items: Vec<CompositeLineItem>,
}
