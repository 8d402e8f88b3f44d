//! Opinion group support
//!
//! Selects the comments that best represent a group and formats ids for
//! display next to them.

mod format;
mod repness;

pub use format::TidFormatter;
pub use repness::{
    repful_tids_by_group, representative_comments, GroupInfo, GroupVotes, RepfulFor,
    RepfulTids, RepnessEntry, RepresentativeCard,
};
