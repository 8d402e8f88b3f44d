//! Represent command
//!
//! Show the comments that best represent one opinion group.

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use ranker_core::config::Config;
use ranker_core::group::{representative_comments, GroupInfo, RepfulFor, TidFormatter};
use ranker_core::view::Carousel;
use ranker_core::CommentId;

use super::load_comments;

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RepresentFormat {
    /// Human-readable cards
    Text,
    /// JSON array of cards
    Json,
}

/// Arguments for the represent command
#[derive(Debug, Args)]
pub struct RepresentArgs {
    /// JSON file holding an array of comment records
    #[arg(long)]
    pub comments: PathBuf,

    /// JSON file holding the group info (count, repness, votes)
    #[arg(long)]
    pub group: PathBuf,

    /// Number of cards (defaults to the configured count)
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Start at this comment's card; later cards follow, wrapping when
    /// `represent.rewind` is set
    #[arg(long, value_name = "TID")]
    pub start: Option<CommentId>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: RepresentFormat,
}

/// Execute the represent command
pub fn execute(args: RepresentArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let comments = load_comments(&args.comments, config)?;
    let content = std::fs::read_to_string(&args.group)
        .with_context(|| format!("Failed to read {}", args.group.display()))?;
    let info: GroupInfo = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", args.group.display()))?;

    let limit = args.limit.unwrap_or(config.represent.max_comments);
    let mut carousel = Carousel::from_config(
        representative_comments(&comments, &info, limit)?,
        &config.represent,
    );
    if let Some(tid) = args.start {
        carousel
            .go_to_tid(tid)
            .ok_or_else(|| anyhow!("comment {} is not a representative card", tid))?;
    }
    let cards = carousel.slide_order();

    match args.format {
        RepresentFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
        RepresentFormat::Text => {
            let tids = TidFormatter::new(&comments);
            for card in cards {
                let header = match card.repful_for {
                    RepfulFor::Agree => card.header().green(),
                    RepfulFor::Disagree => card.header().red(),
                };
                println!("{} {}", tids.format(card.tid).dimmed(), header);
                println!("  {}", card.text);
            }
        }
    }

    Ok(())
}
