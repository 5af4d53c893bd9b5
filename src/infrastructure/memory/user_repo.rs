//! In-Memory User Repository

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::{User, UserRef};

/// 内存用户仓储
pub struct InMemoryUserRepository {
    users: DashMap<UserRef, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn find_by_ref(&self, user_ref: &UserRef) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(user_ref).map(|u| u.clone()))
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        self.users.insert(user.id.clone(), user.clone());
        tracing::debug!(user_id = %user.id, "User saved");
        Ok(())
    }
}
