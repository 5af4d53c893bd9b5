//! Fallback Handler

use crate::infrastructure::http::error::ApiError;

/// API 前缀下未匹配的路径
pub async fn not_found() -> ApiError {
    ApiError::not_found("not found")
}
