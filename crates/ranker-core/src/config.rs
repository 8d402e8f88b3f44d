//! Configuration management for comment-ranker

use crate::comment::validator::{MissingFieldPolicy, MAX_TEXT_LENGTH};
use crate::error::Result;
use crate::rank::RankMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ranking settings
    pub rank: RankConfig,
    /// Input validation settings
    pub validation: ValidationConfig,
    /// Group representative settings
    pub represent: RepresentConfig,
    /// Embed loader settings
    pub embed: EmbedSettings,
    /// Export settings
    pub export: ExportConfig,
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Ranking-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Mode used when none is requested
    pub default_mode: RankMode,
    /// Match search queries case-sensitively
    pub case_sensitive_search: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            default_mode: RankMode::Agree,
            case_sensitive_search: false,
        }
    }
}

/// Validation-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// What to do when a numeric field is absent
    pub missing_fields: MissingFieldPolicy,
    /// Maximum comment text length in characters
    pub max_text_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::Reject,
            max_text_length: MAX_TEXT_LENGTH,
        }
    }
}

/// Group representative configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepresentConfig {
    /// Number of representative comments shown per group
    pub max_comments: usize,
    /// Wrap around at either end of the carousel
    pub rewind: bool,
}

impl Default for RepresentConfig {
    fn default() -> Self {
        Self {
            max_comments: 5,
            rewind: true,
        }
    }
}

/// Embed loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    /// Base URL the iframe path is appended to
    pub base_url: String,
    /// Endpoint used for the cookie redirect dance
    pub launch_prep_url: String,
    /// Domain whose messages are trusted
    pub trusted_domain: String,
    /// Iframe height when none is given
    pub default_height: u32,
    /// Iframe border when none is given
    pub default_border: String,
    /// Iframe border radius when none is given
    pub default_border_radius: String,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            base_url: "https://preprod.pol.is/".to_string(),
            launch_prep_url: "https://embed.pol.is/api/v3/launchPrep".to_string(),
            trusted_domain: "pol.is".to_string(),
            default_height: 930,
            default_border: "1px solid #ccc".to_string(),
            default_border_radius: "4px".to_string(),
        }
    }
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is requested: `text`, `json`, `json-compact`
    /// or `markdown`
    pub default_format: String,
    /// Include the divisive score of each comment
    pub include_scores: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_scores: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rank.default_mode, RankMode::Agree);
        assert_eq!(config.validation.missing_fields, MissingFieldPolicy::Reject);
        assert_eq!(config.represent.max_comments, 5);
        assert_eq!(config.embed.default_height, 930);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[rank]"));
        assert!(toml.contains("[embed]"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config.represent.max_comments, config2.represent.max_comments);
        assert_eq!(config.embed.base_url, config2.embed.base_url);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [rank]
            default_mode = "divisive"

            [validation]
            missing_fields = "zero"
            "#,
        )
        .unwrap();
        assert_eq!(config.rank.default_mode, RankMode::Divisive);
        assert_eq!(config.validation.missing_fields, MissingFieldPolicy::Zero);
        assert_eq!(config.validation.max_text_length, MAX_TEXT_LENGTH);
        assert!(config.represent.rewind);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let result = Config::from_toml_str("[rank]\ndefault_mode = \"loudest\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[represent]\nmax_comments = 3").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.represent.max_comments, 3);
    }
}
