//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod embed;
pub mod rank;
pub mod represent;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ranker_core::comment::{Comment, CommentValidator, RawComment};
use ranker_core::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// comment-ranker - order survey comments by their votes
#[derive(Debug, Parser)]
#[command(name = "comment-ranker")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank a comment file
    Rank(rank::RankArgs),

    /// Show a group's representative comments
    Represent(represent::RepresentArgs),

    /// Print the embed iframe for a conversation
    Embed(embed::EmbedArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler; config commands manage the file themselves
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Rank(args) => rank::execute(args, &load_config(config_path)?),
        Commands::Represent(args) => represent::execute(args, &load_config(config_path)?),
        Commands::Embed(args) => embed::execute(args, &load_config(config_path)?),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Project-local configuration path
pub fn local_config_path() -> PathBuf {
    PathBuf::from(".comment-ranker/config.toml")
}

/// Per-user configuration path
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "comment-ranker", "comment-ranker")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Where configuration is read from: explicit path, project, then user dir
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = local_config_path();
    if local.exists() {
        return Some(local);
    }
    user_config_path().filter(|p| p.exists())
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match resolve_config_path(explicit) {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::load(&path).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Read and validate a JSON array of comment records
pub fn load_comments(path: &Path, config: &Config) -> Result<Vec<Comment>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raws = RawComment::parse_list(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let comments = CommentValidator::from_config(&config.validation)
        .validate_all(&raws)
        .with_context(|| format!("Invalid comment in {}", path.display()))?;
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = PathBuf::from("/tmp/custom.toml");
        assert_eq!(resolve_config_path(Some(path.as_path())), Some(path.clone()));
    }

    #[test]
    fn test_load_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"tid": 1, "txt": "a", "A": 1, "D": 0, "stars": 0, "created": 0}}]"#
        )
        .unwrap();
        let comments = load_comments(file.path(), &Config::default()).unwrap();
        assert_eq!(comments.len(), 1);
    }

    #[test]
    fn test_load_comments_rejects_missing_counts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"tid": 1, "txt": "a"}}]"#).unwrap();
        let err = load_comments(file.path(), &Config::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("missing A"));
    }
}
