//! Comment data models

use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated comment with its vote statistics
///
/// Comments are immutable inputs to ranking; rankers only reorder
/// references to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Comment text
    pub text: String,
    /// Number of agree votes
    pub agree_count: u32,
    /// Number of disagree votes
    pub disagree_count: u32,
    /// Quality score (always finite)
    pub star_score: f64,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Text length in characters
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Total number of agree and disagree votes
    pub fn vote_total(&self) -> u64 {
        u64::from(self.agree_count) + u64::from(self.disagree_count)
    }

    /// Check whether the text contains `query`
    pub fn matches(&self, query: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.text.contains(query)
        } else {
            self.text.to_lowercase().contains(&query.to_lowercase())
        }
    }
}

/// A comment record as received from upstream, before validation
///
/// Numeric fields are kept as untyped JSON so that malformed values can be
/// reported precisely instead of failing the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawComment {
    /// Comment id
    #[serde(default)]
    pub tid: Option<u64>,
    /// Comment text
    #[serde(default)]
    pub txt: Option<String>,
    /// Agree count
    #[serde(rename = "A", default)]
    pub agree: Option<serde_json::Value>,
    /// Disagree count
    #[serde(rename = "D", default)]
    pub disagree: Option<serde_json::Value>,
    /// Star score
    #[serde(default)]
    pub stars: Option<serde_json::Value>,
    /// Creation time: epoch milliseconds or RFC 3339
    #[serde(default)]
    pub created: Option<serde_json::Value>,
}

impl RawComment {
    /// Parse a JSON array of raw comments
    pub fn parse_list(json: &str) -> crate::Result<Vec<RawComment>> {
        Ok(serde_json::from_str(json)?)
    }
}
