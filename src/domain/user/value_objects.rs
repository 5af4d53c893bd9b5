//! User Context - Value Objects

use serde::{Deserialize, Serialize};

/// 用户引用
///
/// 对原始 ID 字符串的不透明包装，不做任何校验，相等性由内部值决定
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRef(String);

impl UserRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_value() {
        assert_eq!(UserRef::new("123"), UserRef::from("123"));
        assert_ne!(UserRef::new("123"), UserRef::new("124"));
    }

    #[test]
    fn test_passes_raw_string_through() {
        let user_ref = UserRef::new(" not-validated ");
        assert_eq!(user_ref.as_str(), " not-validated ");
        assert_eq!(user_ref.to_string(), " not-validated ");
    }
}
