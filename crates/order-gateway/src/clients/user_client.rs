use crate::model::{LoginRequest, User};
use resource_framework::{ClientResult, EntityClient, Resource};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the users service.
#[derive(Clone)]
pub struct UserClient {
    inner: Arc<dyn Resource<User>>,
}

impl UserClient {
    pub fn new(inner: Arc<dyn Resource<User>>) -> Self {
        Self { inner }
    }

    /// POST `users/login`; `None` when the credentials match no user.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<Option<User>> {
        debug!("Sending request");
        let body = serde_json::to_value(credentials)?;
        self.inner.invoke("login", body).await
    }
}

impl EntityClient for UserClient {
    type Entity = User;

    fn inner(&self) -> &dyn Resource<User> {
        self.inner.as_ref()
    }
}
