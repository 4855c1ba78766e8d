//! `/api/v1/orders`. Every engine failure is reported as 500 with its message.

use crate::api::auth::CurrentUser;
use crate::api::error::require_id;
use crate::api::{ApiError, AppState};
use crate::model::{CompositeOrder, OrderId, OrderRecord, OrderRequest};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/orders", get(list_mine).post(add))
        .route(
            "/api/v1/orders/{id}",
            get(get_by_id).put(update).delete(delete),
        )
}

fn validate(request: &OrderRequest) -> Result<(), ApiError> {
    if request.line_items.is_empty() {
        return Err(ApiError::BadRequest(
            "An order needs at least one product".to_string(),
        ));
    }
    if request.address_id.0 < 1 {
        return Err(ApiError::BadRequest("Invalid address id".to_string()));
    }
    Ok(())
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CompositeOrder>, ApiError> {
    let id = OrderId(require_id(id)?);
    state
        .orders
        .get_by_id(id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to retrieve order", e))
}

async fn list_mine(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<CompositeOrder>>, ApiError> {
    let user_id = current.user_id()?;
    state
        .orders
        .get_all_for_user(user_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to retrieve orders", e))
}

async fn add(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(mut request): Json<OrderRequest>,
) -> Result<Json<OrderRecord>, ApiError> {
    validate(&request)?;
    request.user_id = current.user_id()?;
    state
        .orders
        .add(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to create order", e))
}

async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<u32>,
    Json(mut request): Json<OrderRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = OrderId(require_id(id)?);
    validate(&request)?;
    request.user_id = current.user_id()?;
    match state.orders.update(id, request).await {
        Ok(true) => Ok(Json(json!({ "message": format!("Order {id} updated") }))),
        Ok(false) => Err(ApiError::Internal(format!("Order {id} was not updated"))),
        Err(e) => Err(ApiError::internal("Failed to update order", e)),
    }
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, ApiError> {
    let id = OrderId(require_id(id)?);
    match state.orders.delete(id).await {
        Ok(true) => Ok(Json(json!({ "message": format!("Order {id} deleted") }))),
        Ok(false) => Err(ApiError::Internal(format!("Order {id} was not deleted"))),
        Err(e) => Err(ApiError::internal("Failed to delete order", e)),
    }
}
