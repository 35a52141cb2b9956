//! Protocol request dispatch.
//!
//! # Responsibilities
//! - Reject URLs outside the mount prefix
//! - Split path and options, apply options to the request context
//! - Dispatch on the leading segment to the item or category handlers
//! - Turn handler failures into a generic `InternalError` response
//!
//! # Design Decisions
//! - A closed connection yields no response at all
//! - Failure detail goes to the log only, never into the body
//! - Dispatch is synchronous; the caller decides where it runs

use axum::http::{Method, StatusCode};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::matcher::Mount;
use super::options::interpret_options;
use super::path::split_url;
use crate::ais::{AisError, AisErrorCode, RequestContext};
use crate::handlers::{CategoryHandler, ItemHandler, ResourceHandler};
use crate::http::AisResponse;
use crate::inventory::InventoryService;
use crate::observability::metrics;

/// One incoming protocol request, as seen by the router.
#[derive(Debug, Clone)]
pub struct AisRequest<'a> {
    pub method: Method,
    /// Path and query exactly as received.
    pub raw_url: &'a str,
    /// Acting agent; the library owner on library mounts.
    pub agent: Uuid,
}

/// Routes protocol requests to the handler families.
#[derive(Clone)]
pub struct AisRouter {
    inventory: Arc<dyn InventoryService>,
    items: Arc<dyn ResourceHandler>,
    categories: Arc<dyn ResourceHandler>,
}

impl AisRouter {
    /// Router with the built-in item and category handlers.
    pub fn new(inventory: Arc<dyn InventoryService>) -> Self {
        Self::with_handlers(inventory, Arc::new(ItemHandler), Arc::new(CategoryHandler))
    }

    pub fn with_handlers(
        inventory: Arc<dyn InventoryService>,
        items: Arc<dyn ResourceHandler>,
        categories: Arc<dyn ResourceHandler>,
    ) -> Self {
        Self {
            inventory,
            items,
            categories,
        }
    }

    /// Process one request. Returns `None` when the client went away and
    /// nothing should be written.
    pub fn dispatch(&self, mount: &Mount, request: &AisRequest<'_>) -> Option<AisResponse> {
        let start = Instant::now();
        let (family, response) = self.route(mount, request);
        match &response {
            Some(res) => metrics::record_request(family, res.status().as_u16(), start),
            None => metrics::record_disconnect(family),
        }
        response
    }

    fn route(&self, mount: &Mount, request: &AisRequest<'_>) -> (&'static str, Option<AisResponse>) {
        let rest = match mount.strip(request.raw_url) {
            Some(rest) => rest,
            None => return ("none", Some(AisResponse::not_found())),
        };

        let parsed = match split_url(rest) {
            Some(parsed) => parsed,
            None => {
                return (
                    "none",
                    Some(AisResponse::error(
                        StatusCode::BAD_REQUEST,
                        AisErrorCode::InvalidRequest,
                        "Bad request",
                    )),
                )
            }
        };

        let mut ctx = RequestContext::new(
            request.method.clone(),
            self.inventory.as_ref(),
            request.agent,
            mount.is_library(),
            mount.raw_prefix(),
            mount.full_prefix(),
        );

        // A non-numeric depth surfaces as an internal error, not a 400.
        match interpret_options(&parsed.options) {
            Ok(options) => {
                ctx.depth = options.depth;
                ctx.simulate = options.simulate;
            }
            Err(e) => {
                let e = AisError::from(e);
                tracing::debug!(error = %e, url = %request.raw_url, "Failed to interpret options");
                return ("none", Some(AisResponse::internal_error()));
            }
        }

        let (family, handler) = match parsed.family() {
            "item" => ("item", &self.items),
            "category" => ("category", &self.categories),
            _ => return ("none", Some(AisResponse::not_found())),
        };

        tracing::debug!(
            method = %ctx.method,
            family,
            agent = %ctx.agent,
            library = ctx.is_library,
            depth = ctx.depth,
            simulate = ctx.simulate,
            "Dispatching request"
        );

        let response = match handler.handle(&ctx, &parsed.segments) {
            Ok(response) => Some(response),
            Err(AisError::ConnectionClosed) => {
                tracing::trace!(family, "Client disconnected during request");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, family, url = %request.raw_url, "Exception occurred");
                Some(AisResponse::internal_error())
            }
        };
        (family, response)
    }
}

impl std::fmt::Debug for AisRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AisRouter").finish_non_exhaustive()
    }
}
