//! Share configuration: where links point and what the embed snippets contain.
//!
//! Every field has a default, so an empty TOML file is a valid config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://ask-my-course.vercel.app/";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_SCRIPT_SRC: &str = "https://ask-my-course.vercel.app/embed.js";
pub const DEFAULT_SCRIPT_ELEMENT_ID: &str = "ask-my-course-embed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Chatbot site the share link points at. The query string is appended as-is.
    pub base_url: String,
    /// Path appended to the share link for the iframe embed.
    pub chat_path: String,
    /// Percent-encode handle values in the query. Off by default: handles are
    /// inserted exactly as stored.
    pub encode_query: bool,
    pub iframe: IframeEmbed,
    pub script: ScriptEmbed,
}

/// Fixed attributes of the iframe embed snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IframeEmbed {
    pub width: String,
    pub height: String,
}

/// The script-tag embed snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptEmbed {
    pub src: String,
    pub element_id: String,
    /// Append the identifier query string to `src`. Off by default: the script
    /// is a single global widget loader.
    pub parameterized: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            encode_query: false,
            iframe: IframeEmbed::default(),
            script: ScriptEmbed::default(),
        }
    }
}

impl Default for IframeEmbed {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "600".to_string(),
        }
    }
}

impl Default for ScriptEmbed {
    fn default() -> Self {
        Self {
            src: DEFAULT_SCRIPT_SRC.to_string(),
            element_id: DEFAULT_SCRIPT_ELEMENT_ID.to_string(),
            parameterized: false,
        }
    }
}

impl ShareConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read share config: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse share config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), base_url = %config.base_url, "Loaded share config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid share config TOML")
    }
}
