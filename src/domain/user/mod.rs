//! User Context

mod entities;
mod value_objects;

pub use entities::User;
pub use value_objects::UserRef;
