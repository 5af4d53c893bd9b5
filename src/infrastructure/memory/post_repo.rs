//! In-Memory Post Repository

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{PostRepositoryPort, RepositoryError};
use crate::domain::{Post, PostRef};

/// 内存帖子仓储
pub struct InMemoryPostRepository {
    posts: DashMap<PostRef, Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepositoryPort for InMemoryPostRepository {
    async fn find_by_ref(&self, post_ref: &PostRef) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.get(post_ref).map(|p| p.clone()))
    }

    async fn save(&self, post: &Post) -> Result<(), RepositoryError> {
        if self.posts.contains_key(&post.id) {
            return Err(RepositoryError::Duplicate(post.id.to_string()));
        }
        self.posts.insert(post.id.clone(), post.clone());
        Ok(())
    }
}
