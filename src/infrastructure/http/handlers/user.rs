//! User Handlers

use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::GetUser;
use crate::domain::UserRef;
use crate::infrastructure::http::dto::{ApiResult, Payload, UserResponse};
use crate::infrastructure::http::state::AppState;

/// 获取用户详情
pub async fn get_user(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult {
    let query = GetUser {
        user_ref: UserRef::new(id),
    };

    let user = state.get_user_handler.handle(query).await?;

    Payload::json(UserResponse::from(user))
}
