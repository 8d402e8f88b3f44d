//! Ranking modes

use crate::error::RankerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selectable ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Most agreed first, fewer disagrees breaking ties
    #[default]
    Agree,
    /// Most disagreed first, fewer agrees breaking ties
    Disagree,
    /// Most evenly split first
    Divisive,
    /// Highest star score first
    Stars,
}

impl RankMode {
    /// All modes, in display order
    pub const ALL: [RankMode; 4] = [
        RankMode::Agree,
        RankMode::Disagree,
        RankMode::Divisive,
        RankMode::Stars,
    ];

    /// Lowercase name used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMode::Agree => "agree",
            RankMode::Disagree => "disagree",
            RankMode::Divisive => "divisive",
            RankMode::Stars => "stars",
        }
    }
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMode {
    type Err = RankerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agree" => Ok(RankMode::Agree),
            "disagree" => Ok(RankMode::Disagree),
            "divisive" => Ok(RankMode::Divisive),
            "stars" => Ok(RankMode::Stars),
            other => Err(RankerError::Validation(format!(
                "Unknown rank mode: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for mode in RankMode::ALL {
            assert_eq!(mode.to_string().parse::<RankMode>().unwrap(), mode);
        }
        assert_eq!("Divisive".parse::<RankMode>().unwrap(), RankMode::Divisive);
        assert!("newest".parse::<RankMode>().is_err());
    }

    #[test]
    fn test_default_is_agree() {
        assert_eq!(RankMode::default(), RankMode::Agree);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&RankMode::Stars).unwrap(), "\"stars\"");
    }
}
