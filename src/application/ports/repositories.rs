//! Repository Ports - 出站端口
//!
//! 定义数据读取/持久化的抽象接口
//! 具体实现在 infrastructure 层（如 memory）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Metadata, Post, PostRef, User, UserRef};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

// ============================================================================
// Metadata Repository
// ============================================================================

/// Metadata Repository Port
#[async_trait]
pub trait MetadataRepositoryPort: Send + Sync {
    /// 获取服务元信息
    async fn fetch_metadata(&self) -> Result<Metadata, RepositoryError>;
}

// ============================================================================
// User Repository
// ============================================================================

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 根据引用查找用户，不存在时返回 `None`
    async fn find_by_ref(&self, user_ref: &UserRef) -> Result<Option<User>, RepositoryError>;

    /// 保存用户
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Post Repository Port
#[async_trait]
pub trait PostRepositoryPort: Send + Sync {
    /// 根据引用查找帖子，不存在时返回 `None`
    async fn find_by_ref(&self, post_ref: &PostRef) -> Result<Option<Post>, RepositoryError>;

    /// 保存帖子
    async fn save(&self, post: &Post) -> Result<(), RepositoryError>;
}
