//! # HTTP Resource
//!
//! The reqwest-backed [`Resource`] implementation. One instance per downstream
//! collection; all of them can share a single `reqwest::Client`.

use crate::entity::RemoteEntity;
use crate::error::{ClientError, ClientResult};
use crate::resource::Resource;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// A JSON-over-HTTP client for one downstream collection.
///
/// Cheap to clone: the connection pool and base URL are shared.
pub struct HttpResource<T> {
    client: Client,
    base_url: Arc<str>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpResource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: RemoteEntity> HttpResource<T> {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            _entity: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// GET semantics: non-2xx is an error, 2xx other than 200 is "not found".
    async fn read<V: DeserializeOwned>(&self, url: String) -> ClientResult<Option<V>> {
        debug!(resource = T::RESOURCE, %url, "GET");
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;
        if response.status() != StatusCode::OK {
            debug!(resource = T::RESOURCE, status = %response.status(), "Empty read");
            return Ok(None);
        }
        decode_optional(response).await
    }

    /// POST semantics: non-2xx is an error, an empty or `null` body is `None`.
    async fn submit<B: serde::Serialize + ?Sized + Sync>(
        &self,
        url: String,
        body: &B,
    ) -> ClientResult<Option<T>> {
        debug!(resource = T::RESOURCE, %url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        let response = ensure_success(response).await?;
        decode_optional(response).await
    }
}

/// Turns a non-success response into [`ClientError::Status`] carrying the body text.
async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "Failed to read downstream error body");
            String::new()
        }
    };
    warn!(status = status.as_u16(), %body, "Downstream request failed");
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode_optional<V: DeserializeOwned>(response: Response) -> ClientResult<Option<V>> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<V>>(&bytes)?)
}

#[async_trait]
impl<T: RemoteEntity> Resource<T> for HttpResource<T> {
    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn get(&self, id: &T::Id) -> ClientResult<Option<T>> {
        self.read(self.url(&id.to_string())).await
    }

    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn list(&self) -> ClientResult<Option<Vec<T>>> {
        self.read(self.url("")).await
    }

    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn list_by(&self, scope: &str, key: &str) -> ClientResult<Option<Vec<T>>> {
        self.read(self.url(&format!("{scope}/{key}"))).await
    }

    #[instrument(skip(self, params), fields(resource = T::RESOURCE))]
    async fn create(&self, params: &T::Create) -> ClientResult<Option<T>> {
        self.submit(self.url(""), params).await
    }

    #[instrument(skip(self, body), fields(resource = T::RESOURCE))]
    async fn invoke(&self, action: &str, body: serde_json::Value) -> ClientResult<Option<T>> {
        self.submit(self.url(action), &body).await
    }

    #[instrument(skip(self, update), fields(resource = T::RESOURCE))]
    async fn update(&self, id: &T::Id, update: &T::Update) -> ClientResult<bool> {
        let url = self.url(&id.to_string());
        debug!(%url, "PUT");
        let response = self.client.put(&url).json(update).send().await?;
        Ok(response.status().is_success())
    }

    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn delete(&self, id: &T::Id) -> ClientResult<bool> {
        let url = self.url(&id.to_string());
        debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        Ok(response.status().is_success())
    }
}
