//! # User Service
//!
//! Registration and login. A successful login issues a token and records the session so
//! the auth middleware can resolve the bearer back to a user.

pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::{LoginRequest, User};
use crate::session::{LoggedUser, SessionStore, TokenService};
use resource_framework::EntityClient;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct UserService {
    users: UserClient,
    sessions: Arc<dyn SessionStore>,
    tokens: TokenService,
}

impl UserService {
    pub fn new(users: UserClient, sessions: Arc<dyn SessionStore>, tokens: TokenService) -> Self {
        Self {
            users,
            sessions,
            tokens,
        }
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn register(&self, user: User) -> Result<User, UserError> {
        if user.username.trim().is_empty() || user.password.as_deref().unwrap_or("").is_empty() {
            return Err(UserError::InvalidInput(
                "username and password are required".to_string(),
            ));
        }

        let created = self
            .users
            .create(&user)
            .await?
            .ok_or(UserError::CreationFailed)?;
        info!(user_id = %created.id, "User registered");
        Ok(created)
    }

    /// Verifies credentials downstream and opens a session. Returns the bearer token.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: LoginRequest) -> Result<String, UserError> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(UserError::InvalidInput(
                "username and password are required".to_string(),
            ));
        }

        let Some(user) = self.users.login(&credentials).await? else {
            warn!("Login rejected");
            return Err(UserError::InvalidCredentials);
        };

        let token = self.tokens.issue(&user)?;
        info!(user_id = %user.id, "User logged in");
        self.sessions
            .insert(LoggedUser {
                user,
                token: token.clone(),
            })
            .await;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use crate::session::{InMemorySessionStore, TokenError};
    use resource_framework::mock::{MockResource, Operation};

    fn user(id: u32) -> User {
        User {
            id: UserId(id),
            username: "mario".to_string(),
            password: Some("pizza".to_string()),
            name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            email: "mario@example.com".to_string(),
        }
    }

    fn service(mock: &MockResource<User>, sessions: Arc<InMemorySessionStore>) -> UserService {
        UserService::new(
            UserClient::new(mock.client()),
            sessions,
            TokenService::new("secret", "photosi", 24),
        )
    }

    #[tokio::test]
    async fn test_login_opens_session() {
        let mock = MockResource::<User>::new();
        mock.expect_invoke("login").return_ok(Some(user(1)));
        let sessions = Arc::new(InMemorySessionStore::new());
        let users = service(&mock, sessions.clone());

        let token = users
            .login(LoginRequest {
                username: "mario".to_string(),
                password: "pizza".to_string(),
            })
            .await
            .unwrap();

        let session = sessions.lookup(&token).await.unwrap();
        assert_eq!(session.user.id, UserId(1));
        assert_eq!(mock.bodies(Operation::Invoke)[0]["username"], "mario");
    }

    #[tokio::test]
    async fn test_login_with_unknown_credentials() {
        let mock = MockResource::<User>::new();
        let users = service(&mock, Arc::new(InMemorySessionStore::new()));

        let result = users
            .login(LoginRequest {
                username: "mario".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result, Err(UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_with_empty_fields_skips_downstream() {
        let mock = MockResource::<User>::new();
        let users = service(&mock, Arc::new(InMemorySessionStore::new()));

        let result = users
            .login(LoginRequest {
                username: String::new(),
                password: "pizza".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidInput(_))));
        assert_eq!(mock.calls(Operation::Invoke), 0);
    }

    #[tokio::test]
    async fn test_login_with_oversized_token_lifetime_fails_cleanly() {
        let mock = MockResource::<User>::new();
        mock.expect_invoke("login").return_ok(Some(user(1)));
        let sessions = Arc::new(InMemorySessionStore::new());
        let users = UserService::new(
            UserClient::new(mock.client()),
            sessions.clone(),
            TokenService::new("secret", "photosi", i64::MAX),
        );

        let result = users
            .login(LoginRequest {
                username: "mario".to_string(),
                password: "pizza".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(UserError::Token(TokenError::LifetimeOutOfRange(i64::MAX)))
        );
    }

    #[tokio::test]
    async fn test_register_requires_confirmed_user() {
        let mock = MockResource::<User>::new();
        let users = service(&mock, Arc::new(InMemorySessionStore::new()));

        assert_eq!(users.register(user(0)).await, Err(UserError::CreationFailed));

        mock.expect_create().return_ok(Some(user(7)));
        assert_eq!(users.register(user(0)).await.map(|u| u.id), Ok(UserId(7)));
    }
}
