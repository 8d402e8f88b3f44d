//! Rank command
//!
//! Order a comment file by one of the ranking modes.

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use ranker_core::config::Config;
use ranker_core::export::{ExportManager, Exporter};
use ranker_core::group::TidFormatter;
use ranker_core::rank::{CommentRanker, RankMode, RankedList};

use super::load_comments;

/// Ranking mode options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Most agreed first
    Agree,
    /// Most disagreed first
    Disagree,
    /// Most evenly split first
    Divisive,
    /// Highest star score first
    Stars,
}

impl From<ModeArg> for RankMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Agree => RankMode::Agree,
            ModeArg::Disagree => RankMode::Disagree,
            ModeArg::Divisive => RankMode::Divisive,
            ModeArg::Stars => RankMode::Stars,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per comment
    Text,
    /// JSON format
    Json,
    /// Compact JSON
    JsonCompact,
    /// Markdown report
    Markdown,
}

impl OutputFormat {
    /// Exporter name registered with the export manager
    fn exporter_name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::JsonCompact => "json-compact",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Parse `export.default_format`
    fn from_config(config: &Config) -> Result<Self> {
        let name = &config.export.default_format;
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| anyhow!("unknown export.default_format '{}'", name))
    }
}

/// Arguments for the rank command
#[derive(Debug, Args)]
pub struct RankArgs {
    /// JSON file holding an array of comment records
    pub file: PathBuf,

    /// Ranking mode (defaults to the configured mode)
    #[arg(long, short, value_enum)]
    pub mode: Option<ModeArg>,

    /// Only keep comments whose text contains this query
    #[arg(long, short)]
    pub search: Option<String>,

    /// Keep at most this many comments
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Output format (defaults to `export.default_format`)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the rank command
pub fn execute(args: RankArgs, config: &Config) -> Result<()> {
    let comments = load_comments(&args.file, config)?;

    let mut ranker = CommentRanker::from_config(&config.rank);
    if let Some(mode) = args.mode {
        ranker.set_mode(mode.into());
    }
    if let Some(search) = args.search {
        ranker.set_search(search);
    }

    let mut ranked = ranker.rank(&comments);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_config(config)?,
    };

    let mut manager = ExportManager::from_config(&config.export);

    if let Some(output_path) = args.output {
        manager.register(Box::new(TextExporter { colored: false }));
        manager
            .export_to_file(&ranked, format.exporter_name(), &output_path)
            .with_context(|| format!("Failed to write to {}", output_path.display()))?;
        eprintln!("Wrote {} comments to {}", ranked.len(), output_path.display());
    } else {
        manager.register(Box::new(TextExporter { colored: true }));
        let output = manager.export(&ranked, format.exporter_name())?;
        let mut stdout = std::io::stdout();
        stdout
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.ends_with('\n') {
            writeln!(stdout)?;
        }
    }

    Ok(())
}

/// One line per comment: padded id, vote counts, text
struct TextExporter {
    colored: bool,
}

impl Exporter for TextExporter {
    fn export(&self, list: &RankedList<'_>) -> ranker_core::Result<String> {
        use colored::Colorize;

        let tids = TidFormatter::for_ids(list.comments.iter().map(|c| c.id));
        let mut out = String::new();
        for comment in &list.comments {
            let id = tids.format(comment.id);
            let agree = format!("+{}", comment.agree_count);
            let disagree = format!("-{}", comment.disagree_count);
            if self.colored {
                out.push_str(&format!(
                    "{} {} {} {}\n",
                    id.dimmed(),
                    agree.green(),
                    disagree.red(),
                    comment.text
                ));
            } else {
                out.push_str(&format!("{} {} {} {}\n", id, agree, disagree, comment.text));
            }
        }
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}
