use crate::model::ProductId;
use resource_framework::RemoteEntity;
use serde::{Deserialize, Serialize};

/// A product as held by the products service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    #[serde(default)]
    pub id: ProductId,
    pub category_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl RemoteEntity for ProductDetails {
    type Id = ProductId;
    type Create = ProductDetails;
    type Update = ProductDetails;
    const RESOURCE: &'static str = "product";
}
