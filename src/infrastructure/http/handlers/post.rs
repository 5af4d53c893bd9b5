//! Post Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::application::{CreatePost, GetPost};
use crate::domain::PostRef;
use crate::infrastructure::http::auth::AuthenticatedUser;
use crate::infrastructure::http::dto::{ApiResult, CreatePostRequest, Payload, PostResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取帖子详情
pub async fn get_post(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult {
    let query = GetPost {
        post_ref: PostRef::new(id),
    };

    let post = state.get_post_handler.handle(query).await?;

    Payload::json(PostResponse::from(post))
}

/// 以当前登录用户身份发帖
///
/// 没有 JSON 请求体（空 body 或非 JSON content-type）等同于缺少 `text`
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedUser(user_ref)): Extension<AuthenticatedUser>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ApiResult {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => CreatePostRequest::default(),
        Err(rejection) => {
            return Err(ApiError::with_status(
                rejection.status(),
                rejection.body_text(),
            ))
        }
    };

    let text = req
        .text
        .ok_or_else(|| ApiError::validation("`text` is required"))?;

    let command = CreatePost { user_ref, text };
    let post = state.create_post_handler.handle(command).await?;

    Payload::json(PostResponse::from(post))
}
