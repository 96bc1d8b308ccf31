//! Share link and embed snippet derivation.
//!
//! All functions are pure: the same identifiers and config always give the
//! same strings, so callers are free to memoize on `(Identifiers, ShareConfig)`.

use serde::{Deserialize, Serialize};

use crate::config::ShareConfig;
use crate::identifiers::Identifiers;

/// Everything the share dialog displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    pub sharable_url: String,
    pub iframe_snippet: String,
    pub script_snippet: String,
}

impl ShareLinks {
    pub fn derive(ids: &Identifiers, config: &ShareConfig) -> Self {
        let sharable_url = sharable_url(ids, config);
        let iframe_snippet = iframe_snippet(&sharable_url, config);
        Self {
            sharable_url,
            iframe_snippet,
            script_snippet: script_snippet(ids, config),
        }
    }
}

/// `userHandle=..&workspaceHandle=..&instanceHandle=..`.
/// Values are inserted as-is unless `encode` is set.
pub fn query_string(ids: &Identifiers, encode: bool) -> String {
    ids.query_pairs()
        .iter()
        .map(|(name, value)| {
            if encode {
                format!("{}={}", name, urlencoding::encode(value))
            } else {
                format!("{}={}", name, value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Append `query` to `base`, respecting a query string already present.
fn with_query(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}

/// Link to the chatbot for this user / workspace / instance.
pub fn sharable_url(ids: &Identifiers, config: &ShareConfig) -> String {
    with_query(&config.base_url, &query_string(ids, config.encode_query))
}

/// iframe embed pointing at `{sharable_url}{chat_path}`.
pub fn iframe_snippet(sharable_url: &str, config: &ShareConfig) -> String {
    format!(
        r#"<iframe src="{}{}" width="{}" height="{}" frameborder="0"></iframe>"#,
        sharable_url, config.chat_path, config.iframe.width, config.iframe.height
    )
}

/// Script-tag embed. Identical for every identifier triple unless
/// `script.parameterized` is set.
pub fn script_snippet(ids: &Identifiers, config: &ShareConfig) -> String {
    let src = if config.script.parameterized {
        with_query(&config.script.src, &query_string(ids, config.encode_query))
    } else {
        config.script.src.clone()
    };
    format!(
        r#"<script src="{}" id="{}" defer></script>"#,
        src, config.script.element_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sharable_url_for_full_triple() {
        let ids = Identifiers::new("alice", "ws1", "inst1");
        assert_eq!(
            sharable_url(&ids, &ShareConfig::default()),
            "https://ask-my-course.vercel.app/?userHandle=alice&workspaceHandle=ws1&instanceHandle=inst1"
        );
    }

    #[test]
    fn missing_handles_render_as_undefined() {
        let url = sharable_url(&Identifiers::default(), &ShareConfig::default());
        assert!(url.contains("userHandle=undefined&workspaceHandle=undefined&instanceHandle=undefined"));
    }

    #[test]
    fn handles_are_inserted_verbatim_by_default() {
        let ids = Identifiers::new("jane@school.edu", "cs-101+fall", "bot/1");
        assert_eq!(
            sharable_url(&ids, &ShareConfig::default()),
            "https://ask-my-course.vercel.app/?userHandle=jane@school.edu&workspaceHandle=cs-101+fall&instanceHandle=bot/1"
        );
    }

    #[test]
    fn encode_query_percent_encodes_reserved_characters() {
        let config = ShareConfig {
            encode_query: true,
            ..Default::default()
        };
        let ids = Identifiers::new("a&b", "ws 1", "x=y");
        assert_eq!(
            query_string(&ids, config.encode_query),
            "userHandle=a%26b&workspaceHandle=ws%201&instanceHandle=x%3Dy"
        );
        assert_eq!(
            sharable_url(&ids, &config),
            "https://ask-my-course.vercel.app/?userHandle=a%26b&workspaceHandle=ws%201&instanceHandle=x%3Dy"
        );
    }

    #[test]
    fn base_url_with_existing_query() {
        let config = ShareConfig {
            base_url: "https://example.test/app?lang=en".into(),
            ..Default::default()
        };
        let url = sharable_url(&Identifiers::new("u", "w", "i"), &config);
        assert_eq!(
            url,
            "https://example.test/app?lang=en&userHandle=u&workspaceHandle=w&instanceHandle=i"
        );
    }

    #[test]
    fn iframe_src_is_url_plus_chat() {
        let config = ShareConfig::default();
        for ids in [Identifiers::new("alice", "ws1", "inst1"), Identifiers::default()] {
            let links = ShareLinks::derive(&ids, &config);
            let expected = format!(r#"src="{}/chat""#, links.sharable_url);
            assert!(links.iframe_snippet.contains(&expected), "{}", links.iframe_snippet);
        }
    }

    #[test]
    fn iframe_has_fixed_dimensions() {
        let snippet = iframe_snippet("https://x.test/?q=1", &ShareConfig::default());
        assert_eq!(
            snippet,
            r#"<iframe src="https://x.test/?q=1/chat" width="100%" height="600" frameborder="0"></iframe>"#
        );
    }

    #[test]
    fn script_snippet_is_constant_by_default() {
        let config = ShareConfig::default();
        let a = script_snippet(&Identifiers::new("alice", "ws1", "inst1"), &config);
        let b = script_snippet(&Identifiers::default(), &config);
        assert_eq!(a, b);
        assert_eq!(
            a,
            r#"<script src="https://ask-my-course.vercel.app/embed.js" id="ask-my-course-embed" defer></script>"#
        );
    }

    #[test]
    fn parameterized_script_carries_identifiers() {
        let mut config = ShareConfig::default();
        config.script.parameterized = true;
        let snippet = script_snippet(&Identifiers::new("alice", "ws1", "inst1"), &config);
        assert!(snippet.contains(
            "embed.js?userHandle=alice&workspaceHandle=ws1&instanceHandle=inst1"
        ));
    }

    #[test]
    fn derive_is_pure() {
        let ids = Identifiers::new("alice", "ws1", "inst1");
        let config = ShareConfig::default();
        assert_eq!(ShareLinks::derive(&ids, &config), ShareLinks::derive(&ids, &config));
    }
}
