//! Site and share configuration.
//!
//! `share.toml` is embedded at compile time so the server render and the
//! hydrated client always agree on link targets.

use std::sync::LazyLock;

use amc_share::ShareConfig;

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    name: "Ask My Course",
    tagline: "A chatbot that answers questions from your course lectures",
};

static SHARE_TOML: &str = include_str!("../share.toml");

/// Share link targets, parsed once from the embedded `share.toml`.
pub static CONFIG: LazyLock<ShareConfig> = LazyLock::new(|| {
    ShareConfig::from_toml_str(SHARE_TOML).unwrap_or_else(|e| {
        tracing::warn!("Embedded share.toml is invalid, using defaults: {:#}", e);
        ShareConfig::default()
    })
});
