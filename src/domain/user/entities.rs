//! User Context - Entities

use chrono::{DateTime, Utc};

use super::UserRef;

/// 用户
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserRef,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserRef, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
