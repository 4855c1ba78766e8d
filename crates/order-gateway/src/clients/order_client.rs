//! # Order Client
//!
//! CRUD against the orders service. Validation and composition happen in
//! [`OrderService`](crate::order_service::OrderService), never here.
use crate::model::{OrderRecord, UserId};
use resource_framework::{ClientResult, EntityClient, Resource};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: Arc<dyn Resource<OrderRecord>>,
}

impl OrderClient {
    pub fn new(inner: Arc<dyn Resource<OrderRecord>>) -> Self {
        Self { inner }
    }

    /// GET `orders/user/{user_id}`.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> ClientResult<Option<Vec<OrderRecord>>> {
        debug!("Sending request");
        self.inner.list_by("user", &user_id.to_string()).await
    }
}

impl EntityClient for OrderClient {
    type Entity = OrderRecord;

    fn inner(&self) -> &dyn Resource<OrderRecord> {
        self.inner.as_ref()
    }
}
