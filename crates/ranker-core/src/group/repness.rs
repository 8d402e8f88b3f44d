//! Representative comments for an opinion group

use crate::comment::Comment;
use crate::error::{RankerError, Result};
use crate::types::{CommentId, GroupId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, warn};

/// Which way a comment represents its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepfulFor {
    /// The group agrees more than everyone else
    Agree,
    /// The group disagrees more than everyone else
    Disagree,
}

impl RepfulFor {
    /// Arrow used in card headers
    pub fn arrow(&self) -> char {
        match self {
            RepfulFor::Agree => '▲',
            RepfulFor::Disagree => '▼',
        }
    }

    /// Past-tense verb used in card headers
    pub fn verb(&self) -> &'static str {
        match self {
            RepfulFor::Agree => "agreed",
            RepfulFor::Disagree => "disagreed",
        }
    }
}

impl fmt::Display for RepfulFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepfulFor::Agree => write!(f, "agree"),
            RepfulFor::Disagree => write!(f, "disagree"),
        }
    }
}

/// One entry of a group's representativeness list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepnessEntry {
    /// Comment id
    pub tid: CommentId,
    /// Direction the comment represents
    #[serde(rename = "repful-for")]
    pub repful_for: RepfulFor,
    /// Representativeness score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repness: Option<f64>,
}

/// Per-comment vote totals within a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVotes {
    /// Agree votes from group members
    #[serde(rename = "gA_total")]
    pub agree_total: u32,
    /// Disagree votes from group members
    #[serde(rename = "gD_total")]
    pub disagree_total: u32,
}

impl GroupVotes {
    /// Total in the given direction
    pub fn total(&self, direction: RepfulFor) -> u32 {
        match direction {
            RepfulFor::Agree => self.agree_total,
            RepfulFor::Disagree => self.disagree_total,
        }
    }
}

/// Summary of one opinion group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Number of participants in the group
    pub count: u32,
    /// Representative comments, most representative first
    #[serde(default)]
    pub repness: Vec<RepnessEntry>,
    /// Vote totals by comment
    #[serde(default)]
    pub votes: HashMap<CommentId, GroupVotes>,
}

impl GroupInfo {
    /// Share of the group voting `direction` on `tid`, as a floored percentage
    pub fn percent(&self, tid: CommentId, direction: RepfulFor) -> Option<u32> {
        let votes = self.votes.get(&tid)?;
        Some(floor_percent(votes.total(direction), self.count))
    }
}

fn floor_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (u64::from(part) * 100 / u64::from(whole)) as u32
}

/// A representative comment ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeCard {
    /// Comment id
    pub tid: CommentId,
    /// Comment text
    pub text: String,
    /// Direction the comment represents
    pub repful_for: RepfulFor,
    /// Group members voting in that direction
    pub count: u32,
    /// `count` as a floored percentage of the group
    pub percent: u32,
}

impl RepresentativeCard {
    /// Header line, e.g. `▲ 58% agreed`
    pub fn header(&self) -> String {
        format!(
            "{} {}% {}",
            self.repful_for.arrow(),
            self.percent,
            self.repful_for.verb()
        )
    }
}

/// Build the representative cards for a group
///
/// Keeps the order of `info.repness`, skips ids that are not in `comments`
/// (for example moderated out) and stops after `limit` cards.
pub fn representative_comments(
    comments: &[Comment],
    info: &GroupInfo,
    limit: usize,
) -> Result<Vec<RepresentativeCard>> {
    if info.repness.is_empty() {
        warn!("group info is missing repness");
        return Err(RankerError::MissingRepness);
    }

    let by_id: HashMap<CommentId, &Comment> = comments.iter().map(|c| (c.id, c)).collect();

    let mut cards = Vec::with_capacity(limit.min(info.repness.len()));
    for entry in &info.repness {
        if cards.len() >= limit {
            break;
        }
        let Some(comment) = by_id.get(&entry.tid) else {
            debug!(tid = %entry.tid, "skipping representative comment not in comment set");
            continue;
        };
        let votes = info
            .votes
            .get(&entry.tid)
            .ok_or(RankerError::MissingGroupVotes(entry.tid))?;
        let count = votes.total(entry.repful_for);

        cards.push(RepresentativeCard {
            tid: entry.tid,
            text: comment.text.clone(),
            repful_for: entry.repful_for,
            count,
            percent: floor_percent(count, info.count),
        });
    }

    Ok(cards)
}

/// Representative comment ids split by direction, keyed by group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepfulTids {
    /// Ids representing agreement, per group
    pub agree: BTreeMap<GroupId, Vec<CommentId>>,
    /// Ids representing disagreement, per group
    pub disagree: BTreeMap<GroupId, Vec<CommentId>>,
}

impl RepfulTids {
    /// Ids for a group in a direction
    pub fn get(&self, gid: GroupId, direction: RepfulFor) -> &[CommentId] {
        let map = match direction {
            RepfulFor::Agree => &self.agree,
            RepfulFor::Disagree => &self.disagree,
        };
        map.get(&gid).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Split every group's repness list by direction
pub fn repful_tids_by_group(repness: &BTreeMap<GroupId, Vec<RepnessEntry>>) -> RepfulTids {
    let mut tids = RepfulTids::default();
    for (gid, entries) in repness {
        for entry in entries {
            let map = match entry.repful_for {
                RepfulFor::Agree => &mut tids.agree,
                RepfulFor::Disagree => &mut tids.disagree,
            };
            map.entry(*gid).or_default().push(entry.tid);
        }
    }
    tids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::CommentBuilder;
    use pretty_assertions::assert_eq;

    fn comments() -> Vec<Comment> {
        (1..=4)
            .map(|i| CommentBuilder::new(i).text(format!("comment {}", i)).build())
            .collect()
    }

    fn info() -> GroupInfo {
        serde_json::from_str(
            r#"{
                "count": 50,
                "repness": [
                    {"tid": 3, "repful-for": "agree", "repness": 2.5},
                    {"tid": 9, "repful-for": "agree"},
                    {"tid": 1, "repful-for": "disagree", "repness": 1.1},
                    {"tid": 2, "repful-for": "agree", "repness": 0.4}
                ],
                "votes": {
                    "1": {"gA_total": 3, "gD_total": 20},
                    "2": {"gA_total": 10, "gD_total": 0},
                    "3": {"gA_total": 29, "gD_total": 1}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_representative_order_and_filtering() {
        let cards = representative_comments(&comments(), &info(), 5).unwrap();
        let tids: Vec<u64> = cards.iter().map(|c| c.tid.0).collect();
        assert_eq!(tids, vec![3, 1, 2]);
        assert_eq!(cards[0].text, "comment 3");
    }

    #[test]
    fn test_representative_percent_and_header() {
        let cards = representative_comments(&comments(), &info(), 5).unwrap();
        assert_eq!(cards[0].count, 29);
        assert_eq!(cards[0].percent, 58);
        assert_eq!(cards[0].header(), "▲ 58% agreed");
        assert_eq!(cards[1].count, 20);
        assert_eq!(cards[1].header(), "▼ 40% disagreed");
    }

    #[test]
    fn test_representative_limit() {
        let cards = representative_comments(&comments(), &info(), 2).unwrap();
        assert_eq!(cards.len(), 2);
        assert!(representative_comments(&comments(), &info(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_repness() {
        let mut info = info();
        info.repness.clear();
        assert!(matches!(
            representative_comments(&comments(), &info, 5),
            Err(RankerError::MissingRepness)
        ));
    }

    #[test]
    fn test_missing_group_votes() {
        let mut info = info();
        info.votes.remove(&CommentId(1));
        assert!(matches!(
            representative_comments(&comments(), &info, 5),
            Err(RankerError::MissingGroupVotes(CommentId(1)))
        ));
    }

    #[test]
    fn test_empty_group_percent_is_zero() {
        let mut info = info();
        info.count = 0;
        assert_eq!(info.percent(CommentId(3), RepfulFor::Agree), Some(0));
        assert_eq!(info.percent(CommentId(8), RepfulFor::Agree), None);
    }

    #[test]
    fn test_repful_tids_by_group() {
        let mut repness = BTreeMap::new();
        repness.insert(GroupId(0), info().repness);
        repness.insert(
            GroupId(1),
            vec![RepnessEntry {
                tid: CommentId(7),
                repful_for: RepfulFor::Disagree,
                repness: None,
            }],
        );

        let tids = repful_tids_by_group(&repness);
        assert_eq!(
            tids.get(GroupId(0), RepfulFor::Agree),
            &[CommentId(3), CommentId(9), CommentId(2)]
        );
        assert_eq!(tids.get(GroupId(0), RepfulFor::Disagree), &[CommentId(1)]);
        assert_eq!(tids.get(GroupId(1), RepfulFor::Disagree), &[CommentId(7)]);
        assert!(tids.get(GroupId(1), RepfulFor::Agree).is_empty());
        assert!(!tids.agree.contains_key(&GroupId(1)));
    }
}
