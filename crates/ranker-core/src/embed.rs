//! Embed loader
//!
//! Builds the iframe that hosts a conversation inside a third-party page,
//! plus the small URL helpers the host page needs.

use crate::config::EmbedSettings;
use crate::error::{RankerError, Result};
use serde::{Deserialize, Serialize};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::HashMap;
use std::fmt::Write;
use tracing::debug;
use url::Url;

/// Options read from the host element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Conversation to show
    pub conversation_id: Option<String>,
    /// Site owning the page, used with `page_id`
    pub site_id: Option<String>,
    /// Page within the site
    pub page_id: Option<String>,
    /// URL of the host page
    pub parent_url: Option<String>,
    /// CSS border
    pub border: Option<String>,
    /// CSS border radius
    pub border_radius: Option<String>,
    /// Iframe height in pixels
    pub height: Option<u32>,
    /// Show the demo variant
    #[serde(default)]
    pub demo: bool,
}

impl EmbedConfig {
    /// Read `data-*` attributes of a host element
    ///
    /// Empty attributes count as absent. A non-numeric height is an error.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self> {
        let get = |name: &str| {
            attrs
                .get(&format!("data-{}", name))
                .filter(|v| !v.is_empty())
                .cloned()
        };

        let height = match get("height") {
            Some(h) => Some(h.trim().parse().map_err(|_| {
                RankerError::Embed(format!("data-height must be a number, got {:?}", h))
            })?),
            None => None,
        };

        Ok(Self {
            conversation_id: get("conversation_id"),
            site_id: get("site_id"),
            page_id: get("page_id"),
            parent_url: get("parent_url"),
            border: get("border"),
            border_radius: get("border_radius"),
            height,
            demo: get("demo").is_some(),
        })
    }
}

/// A fully resolved iframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IframeSpec {
    pub src: String,
    pub width: String,
    pub height: u32,
    pub border: String,
    pub border_radius: String,
}

impl IframeSpec {
    /// Resolve `config` against `settings`
    ///
    /// `fallback_parent_url` stands in for the host page location when the
    /// config carries no parent URL.
    pub fn build(
        config: &EmbedConfig,
        settings: &EmbedSettings,
        fallback_parent_url: Option<&str>,
    ) -> Result<Self> {
        let mut path: Vec<&str> = Vec::new();
        if config.demo {
            path.push("demo");
        }

        if let Some(conversation_id) = &config.conversation_id {
            path.push(conversation_id);
        } else if let Some(site_id) = &config.site_id {
            let page_id = config.page_id.as_deref().ok_or_else(|| {
                RankerError::Embed("need page_id when using site_id".to_string())
            })?;
            path.push(site_id);
            path.push(page_id);
        } else {
            return Err(RankerError::Embed(
                "need conversation_id or site_id".to_string(),
            ));
        }

        let mut src = settings.base_url.clone();
        if !src.ends_with('/') {
            src.push('/');
        }
        src.push_str(&path.join("/"));

        let parent_url = config.parent_url.as_deref().or(fallback_parent_url);
        if let Some(parent_url) = parent_url {
            src.push_str("?parent_url=");
            src.push_str(&encode_uri_component(parent_url));
        }

        Ok(Self {
            src,
            width: "100%".to_string(),
            height: config.height.unwrap_or(settings.default_height),
            border: config
                .border
                .clone()
                .unwrap_or_else(|| settings.default_border.clone()),
            border_radius: config
                .border_radius
                .clone()
                .unwrap_or_else(|| settings.default_border_radius.clone()),
        })
    }

    /// Render as an `<iframe>` element
    pub fn to_html(&self) -> String {
        format!(
            "<iframe src=\"{}\" width=\"{}\" height=\"{}\" style=\"border: {}; border-radius: {};\"></iframe>",
            escape_attr(&self.src),
            escape_attr(&self.width),
            self.height,
            escape_attr(&self.border),
            escape_attr(&self.border_radius),
        )
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Bytes left alone by `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component the way browsers do
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Encode a return URL as four lowercase hex digits per UTF-16 unit
pub fn encode_return_url(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 4);
    for unit in s.encode_utf16() {
        let _ = write!(out, "{:04x}", unit);
    }
    out
}

/// URL that sets a first-party cookie and then returns to `dest`
pub fn launch_prep_url(settings: &EmbedSettings, dest: &str) -> String {
    format!("{}?dest={}", settings.launch_prep_url, encode_return_url(dest))
}

/// Whether a message origin belongs to `trusted_domain` or a subdomain of it
///
/// Hosts compare case-insensitively; origins that do not parse as URLs are
/// never trusted.
pub fn is_trusted_origin(origin: &str, trusted_domain: &str) -> bool {
    let trusted = trusted_domain.trim_end_matches('.').to_ascii_lowercase();
    if trusted.is_empty() {
        return false;
    }

    let Some(host) = Url::parse(origin)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
    else {
        return false;
    };

    host == trusted
        || host
            .strip_suffix(trusted.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}

impl EmbedSettings {
    /// Check `origin` against the configured trusted domain
    pub fn trusts_origin(&self, origin: &str) -> bool {
        let trusted = is_trusted_origin(origin, &self.trusted_domain);
        if !trusted {
            debug!(origin, "ignoring message from untrusted origin");
        }
        trusted
    }
}
