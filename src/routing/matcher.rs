//! Mount-point matching.
//!
//! # Responsibilities
//! - Decide which protocol mount (agent or library) a raw URL belongs to
//! - Strip the mount prefix before protocol parsing
//!
//! # Design Decisions
//! - Prefix matching is a literal, case-sensitive `starts_with`
//! - More specific mounts are listed first; first match wins

use axum::http::Uri;

/// A prefix under which the protocol is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    raw_prefix: String,
    full_prefix: String,
    is_library: bool,
}

impl Mount {
    /// Create a mount. `external_url` is prepended to the prefix to form
    /// the href base.
    pub fn new(raw_prefix: impl Into<String>, external_url: &str, is_library: bool) -> Self {
        let raw_prefix = raw_prefix.into();
        Self {
            full_prefix: format!("{}{}", external_url, raw_prefix),
            raw_prefix,
            is_library,
        }
    }

    pub fn raw_prefix(&self) -> &str {
        &self.raw_prefix
    }

    pub fn full_prefix(&self) -> &str {
        &self.full_prefix
    }

    pub fn is_library(&self) -> bool {
        self.is_library
    }

    /// Returns true if the raw URL lives under this mount.
    pub fn matches(&self, raw_url: &str) -> bool {
        raw_url.starts_with(&self.raw_prefix)
    }

    /// The part of the raw URL after the prefix.
    pub fn strip<'u>(&self, raw_url: &'u str) -> Option<&'u str> {
        raw_url.strip_prefix(self.raw_prefix.as_str())
    }
}

/// Ordered set of mounts.
#[derive(Debug, Clone, Default)]
pub struct MountTable {
    mounts: Vec<Mount>,
}

impl MountTable {
    /// Build a table; mounts with longer prefixes are checked first.
    pub fn new(mut mounts: Vec<Mount>) -> Self {
        mounts.sort_by(|a, b| b.raw_prefix.len().cmp(&a.raw_prefix.len()));
        Self { mounts }
    }

    pub fn find(&self, raw_url: &str) -> Option<&Mount> {
        self.mounts.iter().find(|m| m.matches(raw_url))
    }
}

/// Path plus query exactly as sent by the client.
pub fn raw_url(uri: &Uri) -> &str {
    uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/")
}
