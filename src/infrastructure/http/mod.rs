//! HTTP Layer - RESTful API
//!
//! 中间件链（由外到内）：信封/错误处理 -> CORS -> 认证 -> handler

pub mod auth;
pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use cors::CorsPolicy;
pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
