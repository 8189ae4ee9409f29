//! Per-bot settings consulted while a method descriptor shapes its payload.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;

/// Markup syntax the platform should parse in free-text fields.
///
/// Docs: <https://core.telegram.org/bots/api#formatting-options>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "Markdown")]
    Markdown,
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,
}

impl ParseMode {
    /// Wire name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
            Self::MarkdownV2 => "MarkdownV2",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration a descriptor may read while building its request.
///
/// Cheap to clone and never mutated by a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Default parse mode substituted when a descriptor leaves its own unset.
    pub parse_mode: Option<ParseMode>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default parse mode.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    /// Derive a context from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            parse_mode: config.bot.parse_mode,
        }
    }
}
