//! Print the share link and embed snippets for a chatbot instance.
//!
//! Handles come from explicit flags, a pasted `Cookie` header, or both
//! (flags win).

use std::path::PathBuf;

use amc_share::{Identifiers, ShareConfig, ShareLinks};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "share-links", version, about = "Print Ask My Course share link and embed snippets")]
struct Args {
    /// User handle
    #[arg(long = "user", env = "AMC_USER_HANDLE")]
    user_handle: Option<String>,

    /// Workspace handle
    #[arg(long = "workspace", env = "AMC_WORKSPACE_HANDLE")]
    workspace_handle: Option<String>,

    /// Chatbot instance handle
    #[arg(long = "instance", env = "AMC_INSTANCE_HANDLE")]
    instance_handle: Option<String>,

    /// Cookie header to read handles from, e.g. "userHandle=a; workspaceHandle=b"
    #[arg(long)]
    cookie: Option<String>,

    /// Share config TOML (defaults apply when omitted)
    #[arg(long, env = "AMC_SHARE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn identifiers(&self) -> Identifiers {
        let explicit = Identifiers {
            user_handle: self.user_handle.clone(),
            workspace_handle: self.workspace_handle.clone(),
            instance_handle: self.instance_handle.clone(),
        };
        let from_cookie = self
            .cookie
            .as_deref()
            .map(Identifiers::from_cookie_header)
            .unwrap_or_default();
        explicit.or(from_cookie)
    }
}

fn render(links: &ShareLinks, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "Sharable link:\n  {}\n\nEmbed with iframe:\n  {}\n\nEmbed with script tag:\n  {}",
            links.sharable_url, links.iframe_snippet, links.script_snippet
        ),
        OutputFormat::Json => serde_json::to_string_pretty(links)?,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ShareConfig::load(path)?,
        None => ShareConfig::default(),
    };

    let ids = args.identifiers();
    if !ids.is_complete() {
        tracing::warn!(?ids, "missing handles will appear as \"undefined\" in the link");
    }

    let links = ShareLinks::derive(&ids, &config);
    println!("{}", render(&links, args.format)?);
    Ok(())
}
