//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::UserRepositoryPort;
use crate::application::queries::GetUser;
use crate::domain::User;

/// GetUser Handler
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<User, ApplicationError> {
        self.user_repo
            .find_by_ref(&query.user_ref)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", query.user_ref.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRef;
    use crate::infrastructure::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_get_existing_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.save(&User::new(UserRef::new("123"), "alice")).await.unwrap();

        let handler = GetUserHandler::new(repo);
        let user = handler
            .handle(GetUser {
                user_ref: UserRef::new("123"),
            })
            .await
            .unwrap();

        assert_eq!(user.name, "alice");
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let handler = GetUserHandler::new(Arc::new(InMemoryUserRepository::new()));
        let err = handler
            .handle(GetUser {
                user_ref: UserRef::new("nobody"),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::NotFound { resource_type: "user", ref id } if id == "nobody"
        ));
    }
}
