//! The user / workspace / instance handle triple a share link is built from.

use serde::{Deserialize, Serialize};

use crate::cookie::cookie_value;

/// Cookie holding the user handle.
pub const USER_HANDLE_COOKIE: &str = "userHandle";
/// Cookie holding the workspace handle.
pub const WORKSPACE_HANDLE_COOKIE: &str = "workspaceHandle";
/// Cookie holding the chatbot instance handle.
pub const INSTANCE_HANDLE_COOKIE: &str = "instanceHandle";

/// Text a missing handle is rendered as inside a share link.
pub const MISSING_HANDLE: &str = "undefined";

/// Opaque session handles. Nothing here is validated; any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifiers {
    pub user_handle: Option<String>,
    pub workspace_handle: Option<String>,
    pub instance_handle: Option<String>,
}

impl Identifiers {
    pub fn new(
        user_handle: impl Into<String>,
        workspace_handle: impl Into<String>,
        instance_handle: impl Into<String>,
    ) -> Self {
        Self {
            user_handle: Some(user_handle.into()),
            workspace_handle: Some(workspace_handle.into()),
            instance_handle: Some(instance_handle.into()),
        }
    }

    /// Read the triple out of a `Cookie` header or `document.cookie` string.
    pub fn from_cookie_header(header: &str) -> Self {
        Self {
            user_handle: cookie_value(header, USER_HANDLE_COOKIE),
            workspace_handle: cookie_value(header, WORKSPACE_HANDLE_COOKIE),
            instance_handle: cookie_value(header, INSTANCE_HANDLE_COOKIE),
        }
    }

    /// Fill any absent handle from `other`.
    pub fn or(self, other: Identifiers) -> Self {
        Self {
            user_handle: self.user_handle.or(other.user_handle),
            workspace_handle: self.workspace_handle.or(other.workspace_handle),
            instance_handle: self.instance_handle.or(other.instance_handle),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.user_handle.is_some() && self.workspace_handle.is_some() && self.instance_handle.is_some()
    }

    /// `(query name, value)` pairs in link order, missing handles as [`MISSING_HANDLE`].
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            (USER_HANDLE_COOKIE, handle_or_missing(&self.user_handle)),
            (WORKSPACE_HANDLE_COOKIE, handle_or_missing(&self.workspace_handle)),
            (INSTANCE_HANDLE_COOKIE, handle_or_missing(&self.instance_handle)),
        ]
    }
}

fn handle_or_missing(handle: &Option<String>) -> &str {
    handle.as_deref().unwrap_or(MISSING_HANDLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_three_cookies() {
        let ids = Identifiers::from_cookie_header(
            "theme=dark; userHandle=alice; workspaceHandle=ws1; instanceHandle=inst1",
        );
        assert_eq!(ids, Identifiers::new("alice", "ws1", "inst1"));
        assert!(ids.is_complete());
    }

    #[test]
    fn missing_cookies_stay_absent() {
        let ids = Identifiers::from_cookie_header("userHandle=alice");
        assert_eq!(ids.user_handle.as_deref(), Some("alice"));
        assert_eq!(ids.workspace_handle, None);
        assert_eq!(ids.instance_handle, None);
        assert!(!ids.is_complete());
    }

    #[test]
    fn duplicate_cookie_keeps_first_value() {
        let ids = Identifiers::from_cookie_header("userHandle=alice; userHandle=mallory");
        assert_eq!(ids.user_handle.as_deref(), Some("alice"));
    }

    #[test]
    fn query_pairs_use_placeholder() {
        let ids = Identifiers {
            workspace_handle: Some("ws1".into()),
            ..Default::default()
        };
        assert_eq!(
            ids.query_pairs(),
            [
                ("userHandle", "undefined"),
                ("workspaceHandle", "ws1"),
                ("instanceHandle", "undefined"),
            ]
        );
    }

    #[test]
    fn or_prefers_self() {
        let explicit = Identifiers {
            user_handle: Some("bob".into()),
            ..Default::default()
        };
        let merged = explicit.or(Identifiers::new("alice", "ws1", "inst1"));
        assert_eq!(merged, Identifiers::new("bob", "ws1", "inst1"));
    }
}
