//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（元信息、用户、帖子、会话仓储）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{handlers::CreatePostHandler, CreatePost};

pub use error::ApplicationError;

pub use ports::{
    MetadataRepositoryPort, PostRepositoryPort, RepositoryError, SessionRepositoryPort,
    UserRepositoryPort,
};

pub use queries::{
    handlers::{GetMetadataHandler, GetPostHandler, GetUserHandler},
    GetMetadata, GetPost, GetUser,
};
