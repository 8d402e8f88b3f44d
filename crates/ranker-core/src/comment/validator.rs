//! Comment validation
//!
//! Raw records are checked here, before any comparator sees them.

use super::model::{Comment, RawComment};
use crate::config::ValidationConfig;
use crate::error::{RankerError, Result};
use crate::types::CommentId;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Maximum comment text length (default)
pub const MAX_TEXT_LENGTH: usize = 10000;

/// How absent numeric fields (`A`, `D`, `stars`, `created`) are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Fail with a validation error
    #[default]
    Reject,
    /// Substitute zero (the Unix epoch for `created`)
    Zero,
}

/// Validator for raw comment records
pub struct CommentValidator {
    missing: MissingFieldPolicy,
    max_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            missing: MissingFieldPolicy::Reject,
            max_length: MAX_TEXT_LENGTH,
        }
    }

    /// Create a validator from configuration
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self {
            missing: config.missing_fields,
            max_length: config.max_text_length,
        }
    }

    /// Set the missing field policy
    pub fn with_missing_fields(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing = policy;
        self
    }

    /// Set the maximum text length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Validate a single raw record
    pub fn validate(&self, raw: &RawComment) -> Result<Comment> {
        let id = raw
            .tid
            .map(CommentId)
            .ok_or_else(|| RankerError::Validation("comment is missing tid".to_string()))?;

        let text = raw.txt.clone().ok_or_else(|| {
            RankerError::Validation(format!("comment {} is missing txt", id))
        })?;
        let len = text.chars().count();
        if len > self.max_length {
            return Err(RankerError::Validation(format!(
                "comment {} text exceeds maximum length of {} characters",
                id, self.max_length
            )));
        }

        Ok(Comment {
            id,
            text,
            agree_count: self.count(id, "A", raw.agree.as_ref())?,
            disagree_count: self.count(id, "D", raw.disagree.as_ref())?,
            star_score: self.stars(id, raw.stars.as_ref())?,
            created_at: self.created(id, raw.created.as_ref())?,
        })
    }

    /// Validate a batch, rejecting duplicate ids
    pub fn validate_all(&self, raws: &[RawComment]) -> Result<Vec<Comment>> {
        let mut seen = HashSet::with_capacity(raws.len());
        let mut comments = Vec::with_capacity(raws.len());

        for raw in raws {
            let comment = self.validate(raw)?;
            if !seen.insert(comment.id) {
                return Err(RankerError::DuplicateComment(comment.id));
            }
            comments.push(comment);
        }

        debug!(count = comments.len(), "validated comment batch");
        Ok(comments)
    }

    fn missing(&self, id: CommentId, field: &str) -> Result<()> {
        match self.missing {
            MissingFieldPolicy::Zero => Ok(()),
            MissingFieldPolicy::Reject => Err(RankerError::Validation(format!(
                "comment {} is missing {}",
                id, field
            ))),
        }
    }

    fn count(&self, id: CommentId, field: &str, value: Option<&Value>) -> Result<u32> {
        let Some(value) = value else {
            self.missing(id, field)?;
            return Ok(0);
        };

        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                RankerError::Validation(format!(
                    "comment {} field {} must be a non-negative integer, got {}",
                    id, field, value
                ))
            })
    }

    fn stars(&self, id: CommentId, value: Option<&Value>) -> Result<f64> {
        let Some(value) = value else {
            self.missing(id, "stars")?;
            return Ok(0.0);
        };

        value
            .as_f64()
            .filter(|s| s.is_finite())
            // -0.0 and 0.0 are the same score
            .map(|s| if s == 0.0 { 0.0 } else { s })
            .ok_or_else(|| {
                RankerError::Validation(format!(
                    "comment {} field stars must be a finite number, got {}",
                    id, value
                ))
            })
    }

    fn created(&self, id: CommentId, value: Option<&Value>) -> Result<DateTime<Utc>> {
        let Some(value) = value else {
            self.missing(id, "created")?;
            return Ok(DateTime::<Utc>::UNIX_EPOCH);
        };

        let parsed = match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        };

        parsed.ok_or_else(|| {
            RankerError::Validation(format!(
                "comment {} field created must be epoch milliseconds or RFC 3339, got {}",
                id, value
            ))
        })
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
