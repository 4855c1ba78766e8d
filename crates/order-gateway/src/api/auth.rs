//! Bearer-token authentication.
//!
//! The middleware resolves `Authorization: Bearer <token>` to a session and attaches it
//! to the request as [`CurrentUser`]. The extension lives and dies with the request.

use crate::api::{ApiError, AppState};
use crate::model::UserId;
use crate::session::LoggedUser;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

/// The logged-in user of the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub LoggedUser);

impl CurrentUser {
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        let id = self.0.user.id;
        if id.0 < 1 {
            return Err(ApiError::BadRequest(
                "Session error: invalid user id".to_string(),
            ));
        }
        Ok(id)
    }

    pub fn username(&self) -> &str {
        &self.0.user.username
    }
}

fn bearer_token(request: &Request) -> Option<String> {
    let value = request.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request)
        .ok_or_else(|| ApiError::Unauthorized("Missing or malformed bearer token".to_string()))?;

    let session = state
        .sessions
        .lookup(&token)
        .await
        .ok_or_else(|| ApiError::Unauthorized("Unknown session".to_string()))?;

    if let Err(e) = state.tokens.validate(&token, &session.user) {
        warn!(user_id = %session.user.id, error = %e, "Token rejected");
        return Err(ApiError::Unauthorized("Invalid token".to_string()));
    }

    debug!(user_id = %session.user.id, "Session attached");
    request.extensions_mut().insert(CurrentUser(session));
    Ok(next.run(request).await)
}
