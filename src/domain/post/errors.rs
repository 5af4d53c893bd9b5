//! Post Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("`text` must not be empty")]
    EmptyText,

    #[error("`text` must be at most {max} characters")]
    TextTooLong { max: usize },
}
