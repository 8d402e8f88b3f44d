//! Markdown exporter for ranked lists

use super::exporter::Exporter;
use crate::comment::Comment;
use crate::error::Result;
use crate::group::TidFormatter;
use crate::rank::{divisive_score, RankedList};

/// Markdown exporter
pub struct MarkdownExporter {
    /// Include divisive scores
    include_scores: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            include_scores: true,
        }
    }

    /// Set whether to include divisive scores
    pub fn with_scores(mut self, include: bool) -> Self {
        self.include_scores = include;
        self
    }

    fn render_header(&self, list: &RankedList<'_>) -> String {
        let mut header = String::new();
        header.push_str("# Ranked Comments\n\n");
        header.push_str(&format!("**Mode:** {}\n", list.mode));
        if let Some(ref search) = list.search {
            header.push_str(&format!("**Search:** `{}`\n", search));
        }
        header.push_str(&format!("**Comments:** {}\n\n", list.len()));
        header
    }

    fn render_comment(&self, rank: usize, comment: &Comment, tids: &TidFormatter) -> String {
        let mut line = format!(
            "{}. {} {}\n   - agree {} / disagree {} / stars {}",
            rank,
            tids.format(comment.id),
            single_line(&comment.text),
            comment.agree_count,
            comment.disagree_count,
            comment.star_score,
        );
        if self.include_scores {
            line.push_str(&format!(
                " / divisive {:.2}",
                divisive_score(comment.agree_count, comment.disagree_count)
            ));
        }
        line.push('\n');
        line
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, list: &RankedList<'_>) -> Result<String> {
        let mut out = self.render_header(list);

        if list.is_empty() {
            out.push_str("_No comments._\n");
            return Ok(out);
        }

        let tids = TidFormatter::for_ids(list.comments.iter().map(|c| c.id));
        for (i, comment) in list.comments.iter().enumerate() {
            out.push_str(&self.render_comment(i + 1, comment, &tids));
        }

        Ok(out)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
