//! `/api/v1/products` and `/api/v1/address-books`, served by the same generic handlers.

use crate::api::error::require_id;
use crate::api::{ApiError, AppState};
use crate::catalog::{CatalogService, CreateOf, IdOf, UpdateOf};
use crate::clients::{AddressClient, ProductClient};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use resource_framework::EntityClient;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// A catalog reachable from the shared application state.
pub trait Catalog: EntityClient + Clone + 'static {
    /// Human-readable name used in error messages.
    const LABEL: &'static str;

    fn service(state: &AppState) -> &CatalogService<Self>;
}

impl Catalog for ProductClient {
    const LABEL: &'static str = "product";

    fn service(state: &AppState) -> &CatalogService<Self> {
        &state.products
    }
}

impl Catalog for AddressClient {
    const LABEL: &'static str = "address book";

    fn service(state: &AppState) -> &CatalogService<Self> {
        &state.address_books
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes::<ProductClient>("/api/v1/products"))
        .merge(catalog_routes::<AddressClient>("/api/v1/address-books"))
}

fn catalog_routes<C>(base: &str) -> Router<AppState>
where
    C: Catalog,
    CreateOf<C>: DeserializeOwned,
    UpdateOf<C>: DeserializeOwned,
{
    Router::new()
        .route(base, get(list::<C>).post(create::<C>))
        .route(
            &format!("{base}/{{id}}"),
            get(get_one::<C>).put(update::<C>).delete(delete::<C>),
        )
}

async fn list<C: Catalog>(State(state): State<AppState>) -> Result<Json<Vec<C::Entity>>, ApiError> {
    C::service(&state)
        .get_all()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(&format!("Failed to retrieve {} list", C::LABEL), e))
}

async fn get_one<C: Catalog>(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<C::Entity>, ApiError> {
    let id = <IdOf<C>>::from(require_id(id)?);
    C::service(&state)
        .get_by_id(id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(&format!("Failed to retrieve {}", C::LABEL), e))
}

async fn create<C>(
    State(state): State<AppState>,
    Json(body): Json<CreateOf<C>>,
) -> Result<Json<C::Entity>, ApiError>
where
    C: Catalog,
    CreateOf<C>: DeserializeOwned,
{
    C::service(&state)
        .add(body)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(&format!("Failed to create {}", C::LABEL), e))
}

async fn update<C>(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(body): Json<UpdateOf<C>>,
) -> Result<Json<Value>, ApiError>
where
    C: Catalog,
    UpdateOf<C>: DeserializeOwned,
{
    let raw = require_id(id)?;
    match C::service(&state).update(<IdOf<C>>::from(raw), body).await {
        Ok(true) => Ok(Json(json!({ "message": format!("{} {raw} updated", C::LABEL) }))),
        Ok(false) => Err(ApiError::Internal(format!("{} {raw} was not updated", C::LABEL))),
        Err(e) => Err(ApiError::internal(&format!("Failed to update {}", C::LABEL), e)),
    }
}

async fn delete<C: Catalog>(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, ApiError> {
    let raw = require_id(id)?;
    match C::service(&state).delete(<IdOf<C>>::from(raw)).await {
        Ok(true) => Ok(Json(json!({ "message": format!("{} {raw} deleted", C::LABEL) }))),
        Ok(false) => Err(ApiError::Internal(format!("{} {raw} was not deleted", C::LABEL))),
        Err(e) => Err(ApiError::internal(&format!("Failed to delete {}", C::LABEL), e)),
    }
}
