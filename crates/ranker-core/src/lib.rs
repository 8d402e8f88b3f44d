//! ranker-core - Core library for comment-ranker
//!
//! This crate orders survey comments by their vote statistics and provides the
//! pieces around it: input validation, list and carousel view state, group
//! representative selection, the embed loader and exporters.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod rank;
pub mod group;
pub mod view;
pub mod embed;
pub mod export;

pub use error::{RankerError, Result};
pub use types::*;
