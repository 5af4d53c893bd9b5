//! HTTP Middleware
//!
//! 信封 / 错误处理中间件，位于 API 中间件链最外层：
//! - 成功：把 handler 产出的 [`Payload`] 包装为 `{"result": ...}`
//! - 失败：按 [`Failure`] 渲染 `{"result": {}, "errors": [{"message": ...}]}`
//! - 下游未分类的 4xx/5xx（extractor rejection、413 等）按状态码错误处理，
//!   空 body 的 4xx 使用标准原因短语

use axum::{
    body::{self, Body},
    extract::Request,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{Envelope, Payload};
use super::error::{non_empty_or_fallback, Failure, FALLBACK_MESSAGE};

/// 读取未分类错误 body 的上限
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

pub async fn envelope_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let mut response = next.run(request).await;

    let payload = response.extensions_mut().remove::<Payload>();
    if let Some(Payload(payload)) = payload {
        return render(response, StatusCode::OK, Envelope::success(payload));
    }

    let failure = response.extensions_mut().remove::<Failure>();
    if let Some(failure) = failure {
        if let Some(cause) = &failure.cause {
            tracing::error!(
                method = %method,
                uri = %uri,
                error = ?cause,
                "Unhandled error"
            );
        } else if failure.status.is_server_error() {
            tracing::error!(
                method = %method,
                uri = %uri,
                status = %failure.status.as_u16(),
                error = %failure.message,
                "HTTP server error"
            );
        } else {
            tracing::warn!(
                method = %method,
                uri = %uri,
                status = %failure.status.as_u16(),
                error = %failure.message,
                "HTTP client error"
            );
        }
        return render(response, failure.status, Envelope::failure(failure.message));
    }

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let text = match body::to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(_) => String::new(),
    };

    let message = if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            body = %text,
            "HTTP server error"
        );
        FALLBACK_MESSAGE.to_string()
    } else {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            error = %text,
            "HTTP client error"
        );
        client_error_message(status, text)
    };

    render(
        Response::from_parts(parts, Body::empty()),
        status,
        Envelope::failure(message),
    )
}

/// 空 body 的 4xx 用状态码的标准原因短语作为消息
fn client_error_message(status: StatusCode, text: String) -> String {
    if !text.is_empty() {
        return text;
    }
    non_empty_or_fallback(status.canonical_reason().unwrap_or_default())
}

/// 用信封替换 body，保留下游设置的其余响应头（如 CORS）
fn render(original: Response, status: StatusCode, envelope: Envelope) -> Response {
    let (mut parts, _) = original.into_parts();
    parts.headers.remove(CONTENT_TYPE);
    parts.headers.remove(CONTENT_LENGTH);

    let mut rendered = (status, Json(envelope)).into_response();
    rendered.headers_mut().extend(parts.headers);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::error::ApiError;
    use axum::{
        http::{HeaderValue, Request as HttpRequest},
        routing::get,
        Router,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn ok_handler() -> Payload {
        Payload(json!({"hello": "world"}))
    }

    async fn failing_handler() -> Result<Payload, ApiError> {
        Err(ApiError::Internal(anyhow::anyhow!("connection refused")))
    }

    async fn teapot_handler() -> (StatusCode, &'static str) {
        (StatusCode::IM_A_TEAPOT, "short and stout")
    }

    async fn bare_server_error() -> (StatusCode, &'static str) {
        (StatusCode::BAD_GATEWAY, "upstream secrets")
    }

    async fn bare_conflict() -> StatusCode {
        StatusCode::CONFLICT
    }

    async fn plain_ok() -> &'static str {
        "OK"
    }

    async fn with_header() -> Response {
        let mut response = ApiError::not_found("gone").into_response();
        response
            .headers_mut()
            .insert("x-custom", HeaderValue::from_static("kept"));
        response
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/fail", get(failing_handler))
            .route("/teapot", get(teapot_handler))
            .route("/bad-gateway", get(bare_server_error))
            .route("/conflict", get(bare_conflict))
            .route("/plain", get(plain_ok))
            .route("/header", get(with_header))
            .layer(axum::middleware::from_fn(envelope_middleware))
    }

    async fn call(uri: &str) -> (StatusCode, Response) {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        let response = create_test_router().oneshot(request).await.unwrap();
        (response.status(), response)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_payload_wrapped_once() {
        let (status, response) = call("/ok").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
        assert_eq!(json_body(response).await, json!({"result": {"hello": "world"}}));
    }

    #[tokio::test]
    async fn test_internal_error_hidden() {
        let (status, response) = call("/fail").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"result": {}, "errors": [{"message": "something happened"}]})
        );
    }

    #[tokio::test]
    async fn test_unclassified_client_error_keeps_status_and_body() {
        let (status, response) = call("/teapot").await;
        assert_eq!(status, StatusCode::IM_A_TEAPOT);
        assert_eq!(
            json_body(response).await,
            json!({"result": {}, "errors": [{"message": "short and stout"}]})
        );
    }

    #[tokio::test]
    async fn test_empty_client_error_uses_reason_phrase() {
        let (status, response) = call("/conflict").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            json_body(response).await,
            json!({"result": {}, "errors": [{"message": "Conflict"}]})
        );
    }

    #[tokio::test]
    async fn test_unclassified_server_error_hides_body() {
        let (status, response) = call("/bad-gateway").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            json_body(response).await,
            json!({"result": {}, "errors": [{"message": "something happened"}]})
        );
    }

    #[tokio::test]
    async fn test_unmarked_success_passes_through() {
        let (status, response) = call("/plain").await;
        assert_eq!(status, StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_downstream_headers_preserved() {
        let (status, response) = call("/header").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-custom"], "kept");
    }
}
