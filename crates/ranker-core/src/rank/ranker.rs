//! Comment ranker

use super::compare::compare;
use super::mode::RankMode;
use crate::comment::Comment;
use crate::config::RankConfig;
use crate::types::CommentId;
use tracing::debug;

/// Order `comments` under `mode`
///
/// Returns references in rank order; the input slice is left untouched.
pub fn rank(comments: &[Comment], mode: RankMode) -> Vec<&Comment> {
    let mut ranked: Vec<&Comment> = comments.iter().collect();
    ranked.sort_by(|a, b| compare(mode, a, b));
    ranked
}

/// Ranked view over a comment set
#[derive(Debug, Clone)]
pub struct RankedList<'a> {
    /// Mode the list was ranked with
    pub mode: RankMode,
    /// Search query applied, if any
    pub search: Option<String>,
    /// Comments in rank order
    pub comments: Vec<&'a Comment>,
}

impl<'a> RankedList<'a> {
    /// Number of comments in the list
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Ids in rank order
    pub fn ids(&self) -> Vec<CommentId> {
        self.comments.iter().map(|c| c.id).collect()
    }

    /// Keep only the first `n` comments
    pub fn truncate(&mut self, n: usize) {
        self.comments.truncate(n);
    }

    /// Zero-based position of a comment, if present
    pub fn position(&self, id: CommentId) -> Option<usize> {
        self.comments.iter().position(|c| c.id == id)
    }
}

/// Ranks comment sets with a mode and an optional text filter
#[derive(Debug, Clone, Default)]
pub struct CommentRanker {
    mode: RankMode,
    search: Option<String>,
    case_sensitive: bool,
}

impl CommentRanker {
    /// Create a ranker for `mode`
    pub fn new(mode: RankMode) -> Self {
        Self {
            mode,
            search: None,
            case_sensitive: false,
        }
    }

    /// Create a ranker from configuration
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            mode: config.default_mode,
            search: None,
            case_sensitive: config.case_sensitive_search,
        }
    }

    /// Set the mode
    pub fn with_mode(mut self, mode: RankMode) -> Self {
        self.mode = mode;
        self
    }

    /// Filter by a text query; an empty query clears the filter
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.set_search(query);
        self
    }

    /// Match the search query case-sensitively
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Current mode
    pub fn mode(&self) -> RankMode {
        self.mode
    }

    /// Change the mode
    pub fn set_mode(&mut self, mode: RankMode) {
        self.mode = mode;
    }

    /// Current search query
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Change the search query; an empty query clears the filter
    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.search = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
    }

    /// Rank `comments`, then drop those not matching the search query
    pub fn rank<'a>(&self, comments: &'a [Comment]) -> RankedList<'a> {
        let mut ranked = rank(comments, self.mode);

        if let Some(query) = &self.search {
            ranked.retain(|c| c.matches(query, self.case_sensitive));
        }

        debug!(
            mode = %self.mode,
            input = comments.len(),
            output = ranked.len(),
            "ranked comments"
        );

        RankedList {
            mode: self.mode,
            search: self.search.clone(),
            comments: ranked,
        }
    }
}
