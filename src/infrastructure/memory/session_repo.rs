//! In-Memory Session Repository

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{RepositoryError, SessionRepositoryPort};
use crate::domain::UserRef;

/// 内存会话仓储（token -> 用户引用）
pub struct InMemorySessionRepository {
    sessions: DashMap<String, UserRef>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepositoryPort for InMemorySessionRepository {
    async fn find_user_ref(&self, token: &str) -> Result<Option<UserRef>, RepositoryError> {
        Ok(self.sessions.get(token).map(|r| r.clone()))
    }

    async fn register(&self, token: &str, user_ref: &UserRef) -> Result<(), RepositoryError> {
        if self.sessions.contains_key(token) {
            return Err(RepositoryError::Duplicate("session token".to_string()));
        }
        self.sessions.insert(token.to_string(), user_ref.clone());
        tracing::info!(user_id = %user_ref, "Session registered");
        Ok(())
    }
}
