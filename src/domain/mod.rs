//! 领域层
//!
//! - User Context: 用户引用与用户实体
//! - Post Context: 帖子引用、正文值对象与帖子实体
//! - Metadata: 服务元信息

pub mod metadata;
pub mod post;
pub mod user;

pub use metadata::Metadata;
pub use post::{Post, PostError, PostRef, PostText, MAX_POST_TEXT_CHARS};
pub use user::{User, UserRef};
