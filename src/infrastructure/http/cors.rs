//! CORS Middleware
//!
//! 仅对 GET/POST/DELETE/PATCH 设置允许任意来源的 CORS 响应头；
//! 可选地直接应答 OPTIONS 预检请求

use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET,POST,DELETE,PATCH";
const ALLOW_HEADERS: &str = "Authorization,Content-Type";

/// CORS 策略
#[derive(Debug, Clone, Copy)]
pub struct CorsPolicy {
    /// 是否以 204 直接应答 OPTIONS 预检
    pub handle_preflight: bool,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            handle_preflight: true,
        }
    }
}

fn is_cors_method(method: &Method) -> bool {
    method == Method::GET
        || method == Method::POST
        || method == Method::DELETE
        || method == Method::PATCH
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

pub async fn cors_middleware(
    State(policy): State<CorsPolicy>,
    request: Request,
    next: Next,
) -> Response {
    if policy.handle_preflight && request.method() == Method::OPTIONS {
        tracing::debug!(uri = %request.uri(), "CORS preflight");
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let applies = is_cors_method(request.method());
    let mut response = next.run(request).await;
    if applies {
        apply_cors_headers(response.headers_mut());
    }
    response
}
