//! Post Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::PostRepositoryPort;
use crate::application::queries::GetPost;
use crate::domain::Post;

/// GetPost Handler
pub struct GetPostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl GetPostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, query: GetPost) -> Result<Post, ApplicationError> {
        self.post_repo
            .find_by_ref(&query.post_ref)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post", query.post_ref.as_str()))
    }
}
