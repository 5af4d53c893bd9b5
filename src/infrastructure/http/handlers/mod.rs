//! HTTP Handlers
//!
//! 每个 handler 只负责：构造引用 -> 调用用例 -> 交给 presenter，
//! 信封由中间件统一包装

mod fallback;
mod metadata;
mod post;
mod user;

pub use fallback::*;
pub use metadata::*;
pub use post::*;
pub use user::*;
