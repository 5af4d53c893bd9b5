//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::PostError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 业务规则违反
    #[error("{0}")]
    BusinessRuleViolation(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<PostError> for ApplicationError {
    fn from(err: PostError) -> Self {
        Self::BusinessRuleViolation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_omits_id() {
        let err = ApplicationError::not_found("user", "123");
        assert_eq!(err.to_string(), "user not found");
    }

    #[test]
    fn test_post_error_becomes_business_rule() {
        let err = ApplicationError::from(PostError::EmptyText);
        assert!(matches!(
            err,
            ApplicationError::BusinessRuleViolation(ref msg) if msg == "`text` must not be empty"
        ));
    }
}
