//! Comment ranking
//!
//! Orders comment sets by vote statistics. Ranking is pure: it never mutates
//! comments and keeps no state between calls, so it can run from any thread.
//!
//! # Example
//!
//! ```
//! use ranker_core::comment::CommentBuilder;
//! use ranker_core::rank::{rank, RankMode};
//!
//! let comments = vec![
//!     CommentBuilder::new(1).votes(10, 5).build(),
//!     CommentBuilder::new(2).votes(10, 2).build(),
//! ];
//! let ranked = rank(&comments, RankMode::Agree);
//! assert_eq!(ranked[0].id.0, 2);
//! ```

mod compare;
mod mode;
mod ranker;

pub use compare::{compare, divisive_score, tie_break};
pub use mode::RankMode;
pub use ranker::{rank, CommentRanker, RankedList};
