use crate::api::auth::CurrentUser;
use crate::api::{ApiError, AppState};
use crate::model::{LoginRequest, User};
use crate::user_service::UserError;
use axum::extract::State;
use axum::{Extension, Json};
use serde_json::{json, Value};

fn map_user_error(context: &str, e: UserError) -> ApiError {
    match e {
        UserError::InvalidInput(message) => ApiError::BadRequest(message),
        other => ApiError::internal(context, other),
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<Value>, ApiError> {
    let created = state
        .users
        .register(user)
        .await
        .map_err(|e| map_user_error("Failed to register user", e))?;
    Ok(Json(json!({
        "message": format!("User created successfully! ID: {}", created.id),
        "id": created.id,
    })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let token = state
        .users
        .login(credentials)
        .await
        .map_err(|e| map_user_error("Login failed", e))?;
    Ok(Json(json!({ "token": token })))
}

pub async fn ping(Extension(current): Extension<CurrentUser>) -> Json<Value> {
    Json(json!({ "message": "pong", "username": current.username() }))
}
