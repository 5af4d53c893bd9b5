//! Post Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PostError;

/// 帖子正文最大字符数
pub const MAX_POST_TEXT_CHARS: usize = 280;

/// 帖子引用
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostRef(String);

impl PostRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 生成新的帖子引用（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PostRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PostRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 帖子正文
///
/// 原文保存（不做 trim），但去掉首尾空白后不能为空，且按字符计不超过 280
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    pub fn new(text: impl Into<String>) -> Result<Self, PostError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(PostError::EmptyText);
        }
        if text.chars().count() > MAX_POST_TEXT_CHARS {
            return Err(PostError::TextTooLong {
                max: MAX_POST_TEXT_CHARS,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PostText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_refs_are_unique() {
        assert_ne!(PostRef::generate(), PostRef::generate());
    }

    #[test]
    fn test_text_keeps_original_content() {
        let text = PostText::new("  hello ").unwrap();
        assert_eq!(text.as_str(), "  hello ");
    }

    #[test]
    fn test_blank_text_rejected() {
        assert_eq!(PostText::new("").unwrap_err(), PostError::EmptyText);
        assert_eq!(PostText::new(" \n\t").unwrap_err(), PostError::EmptyText);
    }

    #[test]
    fn test_length_counted_in_chars() {
        let max = "あ".repeat(MAX_POST_TEXT_CHARS);
        assert!(PostText::new(max.clone()).is_ok());

        let too_long = format!("{}a", max);
        assert_eq!(
            PostText::new(too_long).unwrap_err(),
            PostError::TextTooLong {
                max: MAX_POST_TEXT_CHARS
            }
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PostError::EmptyText.to_string(), "`text` must not be empty");
        assert_eq!(
            PostError::TextTooLong { max: 280 }.to_string(),
            "`text` must be at most 280 characters"
        );
    }
}
