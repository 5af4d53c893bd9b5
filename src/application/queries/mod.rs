//! Queries - CQRS 查询
//!
//! 查询对象与查询处理器

pub mod handlers;

use crate::domain::{PostRef, UserRef};

/// 获取服务元信息查询
#[derive(Debug, Clone)]
pub struct GetMetadata;

/// 获取用户查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_ref: UserRef,
}

/// 获取帖子查询
#[derive(Debug, Clone)]
pub struct GetPost {
    pub post_ref: PostRef,
}
