//! Protocol path and option splitting.
//!
//! # Design Decisions
//! - Only the first `?` separates path from options; any later `?` stays
//!   inside the option text
//! - Repeated `/` are not collapsed: `a//b` yields an empty middle segment
//! - No percent-decoding happens here

/// Path segments and raw option strings of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    pub segments: Vec<&'a str>,
    pub options: Vec<&'a str>,
}

impl<'a> ParsedPath<'a> {
    /// First segment, used to pick the resource family.
    pub fn family(&self) -> &'a str {
        self.segments.first().copied().unwrap_or("")
    }
}

/// Split the prefix-stripped remainder of a request URL.
///
/// Returns `None` when the remainder does not start with `/`.
pub fn split_url(rest: &str) -> Option<ParsedPath<'_>> {
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let path = path.strip_prefix('/')?;
    let segments = path.split('/').collect();
    let options = match query {
        Some(query) => query.split(',').collect(),
        None => Vec::new(),
    };

    Some(ParsedPath { segments, options })
}
