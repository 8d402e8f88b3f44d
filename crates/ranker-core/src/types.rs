//! Core type definitions for comment-ranker

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a comment (the conversation-local `tid`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl CommentId {
    /// Get the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CommentId {
    fn from(value: u64) -> Self {
        CommentId(value)
    }
}

impl FromStr for CommentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CommentId)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an opinion group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl FromStr for GroupId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(GroupId)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_comment_id_parse() {
        assert_eq!("17".parse::<CommentId>().unwrap(), CommentId(17));
        assert_eq!(" 3 ".parse::<CommentId>().unwrap(), CommentId(3));
        assert!("x".parse::<CommentId>().is_err());
    }

    #[test]
    fn test_comment_id_ordering() {
        assert!(CommentId(2) < CommentId(10));
    }

    #[test]
    fn test_ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&CommentId(5)).unwrap(), "5");
        assert_eq!(serde_json::from_str::<GroupId>("2").unwrap(), GroupId(2));
    }

    #[test]
    fn test_comment_id_as_map_key() {
        let map: HashMap<CommentId, u32> = serde_json::from_str(r#"{"4": 1, "9": 2}"#).unwrap();
        assert_eq!(map.get(&CommentId(9)), Some(&2));
    }
}
