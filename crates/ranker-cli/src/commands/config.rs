//! Config command
//!
//! Manage comment-ranker configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

use ranker_core::config::Config;

use super::{load_config, local_config_path, resolve_config_path};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file (a backup is kept)
        #[arg(long)]
        force: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Print which configuration file is used
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(explicit, json),
        ConfigCommand::Init { force } => init_config(explicit, force),
        ConfigCommand::Validate => validate_config(explicit),
        ConfigCommand::Path => show_path(explicit),
    }
}

fn target_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(local_config_path)
}

fn show_config(explicit: Option<&Path>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = load_config(explicit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let source = resolve_config_path(explicit)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string());
        println!("{}", "Configuration:".bold().underline());
        println!("{}", source.dimmed());
        println!();
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(explicit: Option<&Path>, force: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = target_path(explicit);

    if config_path.exists() {
        if !force {
            bail!(
                "{} already exists; pass --force to overwrite",
                config_path.display()
            );
        }
        let backup_path = config_path.with_extension("toml.bak");
        fs::copy(&config_path, &backup_path)
            .with_context(|| format!("Failed to back up {}", config_path.display()))?;
        println!("{} Backed up to {}", "✓".green(), backup_path.display());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = format!(
        "# comment-ranker configuration\n\n{}",
        Config::default().to_toml_string()?
    );
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        config_path.display()
    );

    Ok(())
}

fn validate_config(explicit: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let Some(config_path) = resolve_config_path(explicit) else {
        println!("{} No configuration file; using defaults", "⚠".yellow());
        return Ok(());
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("{} is not valid TOML", config_path.display()))?;
    Config::from_toml_str(&content)
        .with_context(|| format!("{} has invalid settings", config_path.display()))?;

    println!("{} {} is valid", "✓".green(), config_path.display());

    let known = ["rank", "validation", "represent", "embed", "export"];
    if let Some(table) = value.as_table() {
        for key in table.keys().filter(|k| !known.contains(&k.as_str())) {
            println!("{} Unknown section [{}] is ignored", "⚠".yellow(), key);
        }
    }

    Ok(())
}

fn show_path(explicit: Option<&Path>) -> Result<()> {
    match resolve_config_path(explicit) {
        Some(path) => println!("{}", path.display()),
        None => println!("(none; using built-in defaults)"),
    }
    Ok(())
}
