//! Comment system module
//!
//! Holds the comment model and the validation boundary for raw records.

pub mod model;
pub mod validator;
pub mod builder;

pub use model::*;
pub use validator::{CommentValidator, MissingFieldPolicy};
pub use builder::CommentBuilder;
