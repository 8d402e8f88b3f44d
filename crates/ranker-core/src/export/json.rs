//! JSON exporter for ranked lists

use super::exporter::Exporter;
use crate::comment::Comment;
use crate::error::Result;
use crate::rank::{divisive_score, RankMode, RankedList};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Export format version
pub const EXPORT_VERSION: &str = "1.0";

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Whether to include divisive scores
    scores: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            scores: true,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }

    /// Set whether divisive scores are included
    pub fn with_scores(mut self, include: bool) -> Self {
        self.scores = include;
        self
    }
}

impl Exporter for JsonExporter {
    fn export(&self, list: &RankedList<'_>) -> Result<String> {
        let data = ExportData::from_list(list, self.scores);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported document (short field names match the input record)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    /// Format version
    pub v: String,
    /// Mode the list was ranked with
    pub mode: RankMode,
    /// Unix timestamp of the export
    pub ts: i64,
    /// Search query applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Number of comments
    pub n: usize,
    /// Comments in rank order
    pub comments: Vec<ExportComment>,
}

impl ExportData {
    /// Create from a ranked list
    pub fn from_list(list: &RankedList<'_>, scores: bool) -> Self {
        let comments = list
            .comments
            .iter()
            .enumerate()
            .map(|(i, c)| ExportComment::from_comment(i + 1, c, scores))
            .collect();

        Self {
            v: EXPORT_VERSION.to_string(),
            mode: list.mode,
            ts: Utc::now().timestamp(),
            search: list.search.clone(),
            n: list.len(),
            comments,
        }
    }
}

/// One exported comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportComment {
    /// One-based rank
    pub rank: usize,
    /// Comment id
    pub tid: u64,
    /// Text
    pub txt: String,
    /// Agree count
    #[serde(rename = "A")]
    pub agree: u32,
    /// Disagree count
    #[serde(rename = "D")]
    pub disagree: u32,
    /// Star score
    pub stars: f64,
    /// Creation time in epoch milliseconds
    pub created: i64,
    /// Divisive score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ExportComment {
    /// Create from a comment at a given rank
    pub fn from_comment(rank: usize, comment: &Comment, scores: bool) -> Self {
        Self {
            rank,
            tid: comment.id.0,
            txt: comment.text.clone(),
            agree: comment.agree_count,
            disagree: comment.disagree_count,
            stars: comment.star_score,
            created: comment.created_at.timestamp_millis(),
            score: scores.then(|| divisive_score(comment.agree_count, comment.disagree_count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::CommentBuilder;
    use crate::rank::CommentRanker;

    fn comments() -> Vec<Comment> {
        vec![
            CommentBuilder::new(1).text("first").votes(1, 1).created_ms(5).build(),
            CommentBuilder::new(2).text("second").votes(9, 0).build(),
        ]
    }

    #[test]
    fn test_json_export_order_and_fields() {
        let comments = comments();
        let list = CommentRanker::new(RankMode::Agree).rank(&comments);
        let json = JsonExporter::pretty().export(&list).unwrap();

        let data: ExportData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.v, EXPORT_VERSION);
        assert_eq!(data.mode, RankMode::Agree);
        assert_eq!(data.n, 2);
        assert_eq!(data.comments[0].tid, 2);
        assert_eq!(data.comments[0].rank, 1);
        assert_eq!(data.comments[1].created, 5);
        let score = data.comments[1].score.unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
        assert!(json.contains("\"A\": 9"));
    }

    #[test]
    fn test_json_comment_keys_match_input_record() {
        let comments = comments();
        let list = CommentRanker::new(RankMode::Agree).rank(&comments);
        let value: serde_json::Value =
            serde_json::from_str(&JsonExporter::compact().export(&list).unwrap()).unwrap();

        let mut keys: Vec<&str> = value["comments"][0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["A", "D", "created", "rank", "score", "stars", "tid", "txt"]
        );
        assert!(value.get("search").is_none());
    }

    #[test]
    fn test_json_compact_without_scores() {
        let comments = comments();
        let list = CommentRanker::new(RankMode::Agree).rank(&comments);
        let json = JsonExporter::compact().with_scores(false).export(&list).unwrap();
        assert!(!json.contains('\n'));
        assert!(!json.contains("score"));
        assert!(!json.contains("search"));
    }

    #[test]
    fn test_json_records_search() {
        let comments = comments();
        let list = CommentRanker::new(RankMode::Agree)
            .with_search("sec")
            .rank(&comments);
        let data: ExportData =
            serde_json::from_str(&JsonExporter::compact().export(&list).unwrap()).unwrap();
        assert_eq!(data.search.as_deref(), Some("sec"));
        assert_eq!(data.n, 1);
    }
}
