//! Data Transfer Objects
//!
//! 响应信封、请求体以及实体到 JSON 的展示层（presenter）

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::domain::{Metadata, Post, User};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 响应信封
///
/// 成功：`{"result": <payload>}`
/// 失败：`{"result": {}, "errors": [{"message": "..."}]}`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub result: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorMessage>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorMessage {
    pub message: String,
}

impl Envelope {
    pub fn success(payload: Value) -> Self {
        Self {
            result: payload,
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: Value::Object(serde_json::Map::new()),
            errors: Some(vec![ErrorMessage {
                message: message.into(),
            }]),
        }
    }
}

/// Handler 产出的原始负载
///
/// 不直接写 body，由信封中间件包装一次
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

impl Payload {
    /// 通过 serde 把 DTO 转为 JSON 负载
    pub fn json<T: Serialize>(dto: T) -> Result<Self, ApiError> {
        serde_json::to_value(dto)
            .map(Payload)
            .map_err(|e| ApiError::Internal(e.into()))
    }
}

impl IntoResponse for Payload {
    fn into_response(self) -> Response {
        let mut response = StatusCode::OK.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

pub type ApiResult = Result<Payload, ApiError>;

// ============================================================================
// Request DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub text: Option<String>,
}

// ============================================================================
// Presenter
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Metadata> for MetadataResponse {
    fn from(metadata: Metadata) -> Self {
        Self {
            name: metadata.name,
            version: metadata.version,
            description: metadata.description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            name: user.name,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub text: String,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.as_str().to_string(),
            author_id: post.author.as_str().to_string(),
            text: post.text.into_inner(),
            created_at: post.created_at.to_rfc3339(),
        }
    }
}
