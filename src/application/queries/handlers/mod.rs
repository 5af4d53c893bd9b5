//! Query Handlers

mod metadata_handlers;
mod post_handlers;
mod user_handlers;

pub use metadata_handlers::GetMetadataHandler;
pub use post_handlers::GetPostHandler;
pub use user_handlers::GetUserHandler;
