//! Post Commands

use crate::domain::UserRef;

/// 以已认证用户身份发帖
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub user_ref: UserRef,
    pub text: String,
}
