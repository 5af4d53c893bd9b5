//! 基础设施层
//!
//! - http: RESTful API（路由、中间件、handlers）
//! - memory: 端口的内存实现

pub mod http;
pub mod memory;
