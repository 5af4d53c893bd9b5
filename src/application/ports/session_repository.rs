//! Session Repository Port
//!
//! 认证中间件通过它把会话凭证解析为用户引用

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::UserRef;

#[async_trait]
pub trait SessionRepositoryPort: Send + Sync {
    /// 根据会话 token 查找已登录用户，token 无效时返回 `None`
    async fn find_user_ref(&self, token: &str) -> Result<Option<UserRef>, RepositoryError>;

    /// 登记会话
    async fn register(&self, token: &str, user_ref: &UserRef) -> Result<(), RepositoryError>;
}
