//! Per-request state shared with the resource handlers.

use axum::http::Method;
use uuid::Uuid;

use crate::inventory::InventoryService;

/// Depth value standing for `depth=*`.
pub const DEPTH_UNBOUNDED: i32 = i32::MAX;

/// State of one protocol request.
///
/// Built by the router, which fills `depth` and `simulate` from the query
/// options before dispatch; handlers only ever see a shared reference.
pub struct RequestContext<'a> {
    pub method: Method,
    pub inventory: &'a dyn InventoryService,
    /// Acting agent, or the library owner for library requests.
    pub agent: Uuid,
    pub is_library: bool,
    /// Prefix as it appears in the request path.
    pub raw_prefix: &'a str,
    /// Externally visible prefix used to build hrefs.
    pub full_prefix: &'a str,
    pub simulate: bool,
    pub depth: i32,
}

impl<'a> RequestContext<'a> {
    pub fn new(
        method: Method,
        inventory: &'a dyn InventoryService,
        agent: Uuid,
        is_library: bool,
        raw_prefix: &'a str,
        full_prefix: &'a str,
    ) -> Self {
        Self {
            method,
            inventory,
            agent,
            is_library,
            raw_prefix,
            full_prefix,
            simulate: false,
            depth: 0,
        }
    }

    /// Href of an item resource.
    pub fn item_href(&self, id: Uuid) -> String {
        format!("{}/item/{}", self.full_prefix, id)
    }

    /// Href of a category resource addressed by keyword or id.
    pub fn category_href(&self, token: impl std::fmt::Display) -> String {
        format!("{}/category/{}", self.full_prefix, token)
    }
}

impl std::fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("agent", &self.agent)
            .field("is_library", &self.is_library)
            .field("raw_prefix", &self.raw_prefix)
            .field("full_prefix", &self.full_prefix)
            .field("simulate", &self.simulate)
            .field("depth", &self.depth)
            .finish()
    }
}
