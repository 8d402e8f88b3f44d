//! Comparators for each ranking mode
//!
//! Every comparator ends in [`tie_break`], which ends in the comment id, so
//! distinct comments never compare equal.

use super::mode::RankMode;
use crate::comment::Comment;
use std::cmp::Ordering;

/// Divisiveness of a vote split: `(A * D) / (A + D + 1)`
///
/// The `+ 1` keeps comments with no votes at a score of zero.
pub fn divisive_score(agree: u32, disagree: u32) -> f64 {
    let a = f64::from(agree);
    let d = f64::from(disagree);
    (a * d) / (a + d + 1.0)
}

/// Compare two comments under `mode`; `Less` means `a` ranks first
pub fn compare(mode: RankMode, a: &Comment, b: &Comment) -> Ordering {
    let primary = match mode {
        RankMode::Agree => b
            .agree_count
            .cmp(&a.agree_count)
            .then(a.disagree_count.cmp(&b.disagree_count)),
        RankMode::Disagree => b
            .disagree_count
            .cmp(&a.disagree_count)
            .then(a.agree_count.cmp(&b.agree_count)),
        RankMode::Divisive => {
            let sa = divisive_score(a.agree_count, a.disagree_count);
            let sb = divisive_score(b.agree_count, b.disagree_count);
            score_cmp(sb, sa).then(a.agree_count.cmp(&b.agree_count))
        }
        RankMode::Stars => score_cmp(b.star_score, a.star_score),
    };

    primary.then_with(|| tie_break(a, b))
}

/// Numeric order where `-0.0` equals `0.0`; NaN falls back to `total_cmp`
fn score_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Ordering applied when the mode's own keys are equal
///
/// Higher stars, then shorter text, then newer, then lower id.
pub fn tie_break(a: &Comment, b: &Comment) -> Ordering {
    score_cmp(b.star_score, a.star_score)
        .then_with(|| a.text_len().cmp(&b.text_len()))
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}
