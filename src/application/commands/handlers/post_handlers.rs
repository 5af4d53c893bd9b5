//! Post Command Handlers

use std::sync::Arc;

use crate::application::commands::CreatePost;
use crate::application::error::ApplicationError;
use crate::application::ports::{PostRepositoryPort, UserRepositoryPort};
use crate::domain::{Post, PostText};

/// CreatePost Handler
///
/// 校验作者存在与正文规则后保存并返回新帖子
pub struct CreatePostHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl CreatePostHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        post_repo: Arc<dyn PostRepositoryPort>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
        }
    }

    pub async fn handle(&self, command: CreatePost) -> Result<Post, ApplicationError> {
        let author = self
            .user_repo
            .find_by_ref(&command.user_ref)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", command.user_ref.as_str()))?;

        let text = PostText::new(command.text)?;
        let post = Post::publish(author.id, text);

        self.post_repo.save(&post).await?;

        tracing::info!(
            post_id = %post.id,
            author_id = %post.author,
            "Post created"
        );

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserRef, MAX_POST_TEXT_CHARS};
    use crate::infrastructure::memory::{InMemoryPostRepository, InMemoryUserRepository};

    async fn setup() -> (CreatePostHandler, Arc<InMemoryPostRepository>) {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        user_repo
            .save(&User::new(UserRef::new("123"), "alice"))
            .await
            .unwrap();
        let post_repo = Arc::new(InMemoryPostRepository::new());
        (
            CreatePostHandler::new(user_repo, post_repo.clone()),
            post_repo,
        )
    }

    #[tokio::test]
    async fn test_create_post_persists() {
        let (handler, post_repo) = setup().await;

        let post = handler
            .handle(CreatePost {
                user_ref: UserRef::new("123"),
                text: "hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(post.text.as_str(), "hello");
        assert_eq!(post.author, UserRef::new("123"));

        let stored = post_repo.find_by_ref(&post.id).await.unwrap();
        assert_eq!(stored, Some(post));
    }

    #[tokio::test]
    async fn test_unknown_author_is_not_found() {
        let (handler, post_repo) = setup().await;

        let err = handler
            .handle(CreatePost {
                user_ref: UserRef::new("ghost"),
                text: "hello".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
        assert_eq!(post_repo.len(), 0);
    }

    #[tokio::test]
    async fn test_rule_violations_are_business_errors() {
        let (handler, post_repo) = setup().await;

        for text in ["   ".to_string(), "x".repeat(MAX_POST_TEXT_CHARS + 1)] {
            let err = handler
                .handle(CreatePost {
                    user_ref: UserRef::new("123"),
                    text,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::BusinessRuleViolation(_)));
        }
        assert_eq!(post_repo.len(), 0);
    }
}
