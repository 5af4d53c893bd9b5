//! Memory Layer - In-Memory Port Adapters
//!
//! 用 DashMap 实现用户、帖子、会话仓储，以及基于配置的元信息仓储

mod metadata_repo;
mod post_repo;
mod session_repo;
mod user_repo;

pub use metadata_repo::StaticMetadataRepository;
pub use post_repo::InMemoryPostRepository;
pub use session_repo::InMemorySessionRepository;
pub use user_repo::InMemoryUserRepository;
