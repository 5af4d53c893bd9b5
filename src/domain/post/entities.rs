//! Post Context - Entities

use chrono::{DateTime, Utc};

use super::{PostRef, PostText};
use crate::domain::user::UserRef;

/// 帖子
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostRef,
    pub author: UserRef,
    pub text: PostText,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// 为指定作者创建新帖子
    pub fn publish(author: UserRef, text: PostText) -> Self {
        Self {
            id: PostRef::generate(),
            author,
            text,
            created_at: Utc::now(),
        }
    }
}
