//! Post Context

mod entities;
mod errors;
mod value_objects;

pub use entities::Post;
pub use errors::PostError;
pub use value_objects::{PostRef, PostText, MAX_POST_TEXT_CHARS};
