//! Authentication Middleware
//!
//! 从 `Authorization: Bearer <token>` 解析会话，成功时把
//! [`AuthenticatedUser`] 放入请求 extensions，失败时以 401 短路

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use super::error::ApiError;
use super::state::AppState;
use crate::domain::UserRef;

/// 已认证用户
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserRef);

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(request.headers())?;

    let user_ref = state
        .session_repo
        .find_user_ref(token)
        .await?
        .ok_or_else(|| {
            tracing::debug!("unknown session token");
            ApiError::unauthorized("invalid session")
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser(user_ref));

    Ok(next.run(request).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("authentication required"))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .unwrap_or_default();

    if token.is_empty() {
        tracing::debug!("missing or malformed authorization header");
        return Err(ApiError::unauthorized("authentication required"));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let map = headers("Bearer abc");
        assert_eq!(extract_bearer(&map).unwrap(), "abc");
    }

    #[test]
    fn test_rejects_missing_or_malformed() {
        assert!(matches!(
            extract_bearer(&HeaderMap::new()),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(extract_bearer(&headers("Basic abc")).is_err());
        assert!(extract_bearer(&headers("Bearer   ")).is_err());
    }
}
