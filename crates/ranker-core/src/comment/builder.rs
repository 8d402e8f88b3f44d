//! Comment builder for fluent API

use super::model::Comment;
use crate::error::{RankerError, Result};
use crate::types::CommentId;
use chrono::{DateTime, TimeZone, Utc};

/// Builder for creating comments in-process
pub struct CommentBuilder {
    id: CommentId,
    text: String,
    agree_count: u32,
    disagree_count: u32,
    star_score: f64,
    created_at: DateTime<Utc>,
}

impl CommentBuilder {
    /// Create a new builder for the given id
    pub fn new(id: u64) -> Self {
        Self {
            id: CommentId(id),
            text: String::new(),
            agree_count: 0,
            disagree_count: 0,
            star_score: 0.0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Set the comment text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set agree and disagree counts
    pub fn votes(mut self, agree: u32, disagree: u32) -> Self {
        self.agree_count = agree;
        self.disagree_count = disagree;
        self
    }

    /// Set the agree count
    pub fn agree(mut self, agree: u32) -> Self {
        self.agree_count = agree;
        self
    }

    /// Set the disagree count
    pub fn disagree(mut self, disagree: u32) -> Self {
        self.disagree_count = disagree;
        self
    }

    /// Set the star score
    pub fn stars(mut self, stars: f64) -> Self {
        self.star_score = stars;
        self
    }

    /// Set the creation time
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the creation time from epoch milliseconds
    ///
    /// Out-of-range values leave the current timestamp unchanged.
    pub fn created_ms(mut self, ms: i64) -> Self {
        if let Some(dt) = Utc.timestamp_millis_opt(ms).single() {
            self.created_at = dt;
        }
        self
    }

    /// Build the comment
    pub fn build(self) -> Comment {
        Comment {
            id: self.id,
            text: self.text,
            agree_count: self.agree_count,
            disagree_count: self.disagree_count,
            star_score: self.star_score,
            created_at: self.created_at,
        }
    }

    /// Build the comment, rejecting a non-finite star score
    pub fn try_build(self) -> Result<Comment> {
        if !self.star_score.is_finite() {
            return Err(RankerError::Validation(format!(
                "comment {} star score must be finite",
                self.id
            )));
        }
        Ok(self.build())
    }
}
