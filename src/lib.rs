//! Postline - 帖子与用户 HTTP API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User / Post 引用类型与实体
//! - Metadata 服务元信息
//!
//! 应用层 (application/):
//! - Ports: 元信息、用户、帖子、会话仓储端口
//! - Commands: 发帖
//! - Queries: 元信息、用户、帖子查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 路由 + 信封/错误处理、CORS、认证中间件
//! - Memory: 端口的内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
