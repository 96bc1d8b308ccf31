//! Share links and embed snippets for Ask My Course chatbots.
//!
//! Everything here is framework-free so the same derivation backs the
//! Leptos share widget and the `share-links` CLI.

pub mod config;
pub mod cookie;
pub mod identifiers;
pub mod links;

pub use config::{IframeEmbed, ScriptEmbed, ShareConfig};
pub use cookie::{cookie_value, parse_cookie_header};
pub use identifiers::Identifiers;
pub use links::{ShareLinks, iframe_snippet, script_snippet, sharable_url};
