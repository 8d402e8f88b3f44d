//! Embed command
//!
//! Print the iframe that embeds a conversation in another page.

use anyhow::{bail, Result};
use clap::Args;

use ranker_core::config::Config;
use ranker_core::embed::{EmbedConfig, IframeSpec};

/// Arguments for the embed command
#[derive(Debug, Args)]
pub struct EmbedArgs {
    /// Conversation to embed
    #[arg(long, conflicts_with = "site_id")]
    pub conversation_id: Option<String>,

    /// Site id (requires --page-id)
    #[arg(long)]
    pub site_id: Option<String>,

    /// Page id within the site
    #[arg(long)]
    pub page_id: Option<String>,

    /// URL of the hosting page
    #[arg(long)]
    pub parent_url: Option<String>,

    /// Iframe height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// CSS border
    #[arg(long)]
    pub border: Option<String>,

    /// CSS border radius
    #[arg(long)]
    pub border_radius: Option<String>,

    /// Embed the demo variant
    #[arg(long)]
    pub demo: bool,

    /// Print only the iframe URL
    #[arg(long)]
    pub src_only: bool,

    /// Check whether messages from this origin would be trusted, then exit
    #[arg(long, value_name = "ORIGIN")]
    pub check_origin: Option<String>,
}

impl From<EmbedArgs> for EmbedConfig {
    fn from(args: EmbedArgs) -> Self {
        EmbedConfig {
            conversation_id: args.conversation_id,
            site_id: args.site_id,
            page_id: args.page_id,
            parent_url: args.parent_url,
            border: args.border,
            border_radius: args.border_radius,
            height: args.height,
            demo: args.demo,
        }
    }
}

/// Execute the embed command
pub fn execute(args: EmbedArgs, config: &Config) -> Result<()> {
    if let Some(origin) = &args.check_origin {
        if !config.embed.trusts_origin(origin) {
            bail!(
                "{} is not trusted (trusted domain: {})",
                origin,
                config.embed.trusted_domain
            );
        }
        println!("{} is trusted", origin);
        return Ok(());
    }

    let src_only = args.src_only;
    let embed: EmbedConfig = args.into();
    let iframe = IframeSpec::build(&embed, &config.embed, None)?;

    if src_only {
        println!("{}", iframe.src);
    } else {
        println!("{}", iframe.to_html());
    }

    Ok(())
}
