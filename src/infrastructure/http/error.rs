//! HTTP Error Handling
//!
//! 封闭的错误种类集合，以及从种类到 (状态码, 消息) 的完整映射。
//! 错误响应本身不带 body，只在 extensions 中携带 [`Failure`]，
//! 由 [`envelope_middleware`](super::middleware::envelope_middleware) 统一渲染信封。

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::application::{ApplicationError, RepositoryError};

/// 客户端看到的兜底错误消息
pub const FALLBACK_MESSAGE: &str = "something happened";

/// API 错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 资源或路由不存在
    #[error("{0}")]
    NotFound(String),

    /// 客户端输入缺失或格式错误
    #[error("{0}")]
    Validation(String),

    /// 业务规则违反
    #[error("{0}")]
    BusinessLogic(String),

    /// 会话凭证缺失或无效
    #[error("{0}")]
    Unauthorized(String),

    /// 携带明确状态码的错误
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// 未分类错误，消息不会返回给客户端
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn business_logic(message: impl Into<String>) -> Self {
        Self::BusinessLogic(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// 错误种类 -> (状态码, 返回给客户端的消息)
    pub fn classify(&self) -> (StatusCode, String) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BusinessLogic(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Status { status, message } => (*status, non_empty_or_fallback(message)),
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_MESSAGE.to_string())
            }
        }
    }
}

pub(crate) fn non_empty_or_fallback(message: &str) -> String {
    if message.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}

/// 已分类的失败，挂在响应 extensions 上等待渲染
#[derive(Debug, Clone)]
pub struct Failure {
    pub status: StatusCode,
    pub message: String,
    /// 仅未分类错误携带，用于日志
    pub cause: Option<Arc<anyhow::Error>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();
        let cause = match self {
            ApiError::Internal(err) => Some(Arc::new(err)),
            _ => None,
        };

        let mut response = status.into_response();
        response.extensions_mut().insert(Failure {
            status,
            message,
            cause,
        });
        response
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::Internal(anyhow::Error::new(e))
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            e @ ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::BusinessRuleViolation(msg) => ApiError::BusinessLogic(msg),
            e @ ApplicationError::RepositoryError(_) => {
                ApiError::Internal(anyhow::Error::new(e))
            }
        }
    }
}
