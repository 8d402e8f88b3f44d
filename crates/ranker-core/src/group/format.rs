//! Display formatting for comment ids

use crate::comment::Comment;
use crate::types::CommentId;

/// Formats ids as `#` plus the id zero-padded to the widest id in a set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TidFormatter {
    width: usize,
}

impl TidFormatter {
    /// Size the padding for `comments`
    pub fn new(comments: &[Comment]) -> Self {
        Self::for_ids(comments.iter().map(|c| c.id))
    }

    /// Size the padding for a set of ids
    pub fn for_ids(ids: impl IntoIterator<Item = CommentId>) -> Self {
        let max = ids.into_iter().max().unwrap_or(CommentId(0));
        Self {
            width: max.to_string().len(),
        }
    }

    /// Padding width in digits
    pub fn width(&self) -> usize {
        self.width
    }

    /// Format an id, e.g. `#007`
    pub fn format(&self, tid: CommentId) -> String {
        format!("#{:0width$}", tid.0, width = self.width)
    }
}
