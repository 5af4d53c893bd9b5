//! Metadata Handler

use axum::extract::State;
use std::sync::Arc;

use crate::application::GetMetadata;
use crate::infrastructure::http::dto::{ApiResult, MetadataResponse, Payload};
use crate::infrastructure::http::state::AppState;

/// 获取服务元信息
pub async fn get_metadata(State(state): State<Arc<AppState>>) -> ApiResult {
    let metadata = state.get_metadata_handler.handle(GetMetadata).await?;
    Payload::json(MetadataResponse::from(metadata))
}
