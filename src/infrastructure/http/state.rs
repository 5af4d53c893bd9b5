//! Application State
//!
//! 注入的端口与基于它们构建的 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreatePostHandler,
    // Query handlers
    GetMetadataHandler, GetPostHandler, GetUserHandler,
    // Ports
    MetadataRepositoryPort, PostRepositoryPort, SessionRepositoryPort, UserRepositoryPort,
};

/// 应用状态
///
/// 请求之间只共享这里的不可变引用
pub struct AppState {
    // ========== Ports ==========
    pub session_repo: Arc<dyn SessionRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_post_handler: CreatePostHandler,

    // ========== Query Handlers ==========
    pub get_metadata_handler: GetMetadataHandler,
    pub get_user_handler: GetUserHandler,
    pub get_post_handler: GetPostHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        metadata_repo: Arc<dyn MetadataRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        post_repo: Arc<dyn PostRepositoryPort>,
        session_repo: Arc<dyn SessionRepositoryPort>,
    ) -> Self {
        Self {
            // Ports
            session_repo,

            // Command handlers
            create_post_handler: CreatePostHandler::new(user_repo.clone(), post_repo.clone()),

            // Query handlers
            get_metadata_handler: GetMetadataHandler::new(metadata_repo),
            get_user_handler: GetUserHandler::new(user_repo),
            get_post_handler: GetPostHandler::new(post_repo),
        }
    }
}
