//! Commands - CQRS 命令
//!
//! 命令对象与命令处理器

pub mod handlers;
mod post_commands;

pub use post_commands::CreatePost;
