use crate::model::User;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A user together with the token issued at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedUser {
    pub user: User,
    pub token: String,
}

/// Registry of active sessions.
///
/// There is no logout: a session stays registered until the process exits. An expired
/// token is still rejected by the auth middleware because it fails validation.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: LoggedUser);

    async fn lookup(&self, token: &str) -> Option<LoggedUser>;
}

/// Process-local session registry. Sessions are never evicted.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, LoggedUser>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: LoggedUser) {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
    }

    async fn lookup(&self, token: &str) -> Option<LoggedUser> {
        self.sessions.read().await.get(token).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn session(token: &str) -> LoggedUser {
        LoggedUser {
            user: User {
                id: UserId(1),
                username: "mario".to_string(),
                password: None,
                name: "Mario".to_string(),
                surname: "Rossi".to_string(),
                email: "mario@example.com".to_string(),
            },
            token: token.to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_finds_inserted_session() {
        let store = InMemorySessionStore::new();
        store.insert(session("abc")).await;

        assert_eq!(store.lookup("abc").await, Some(session("abc")));
        assert_eq!(store.lookup("xyz").await, None);
    }

    #[tokio::test]
    async fn test_each_login_keeps_its_own_session() {
        let store = InMemorySessionStore::new();
        store.insert(session("first")).await;
        store.insert(session("second")).await;

        assert_eq!(store.lookup("first").await, Some(session("first")));
        assert_eq!(store.lookup("second").await, Some(session("second")));
    }
}
