//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the protocol catch-all handler
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Pick the mount and acting agent for each request
//! - Run the synchronous protocol core on the blocking pool
//! - Serve until shutdown is signalled

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::ais::AisErrorCode;
use crate::config::ServiceConfig;
use crate::http::request::{
    agent_from_headers, propagate_request_id_layer, set_request_id_layer, RequestIdExt,
};
use crate::http::response::AisResponse;
use crate::inventory::InventoryService;
use crate::observability::metrics;
use crate::routing::matcher::raw_url;
use crate::routing::{AisRequest, AisRouter, Mount, MountTable};

/// Status logged for requests whose client went away (nginx convention).
const CLIENT_CLOSED_REQUEST: u16 = 499;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<AisRouter>,
    pub mounts: Arc<MountTable>,
    pub agent_header: HeaderName,
    pub library_owner: Uuid,
}

/// HTTP server for the inventory service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given inventory backend.
    ///
    /// `config` is expected to have passed validation; an unusable agent
    /// header name falls back to `x-agent-id`.
    pub fn new(config: ServiceConfig, inventory: Arc<dyn InventoryService>) -> Self {
        Self::with_router(config, AisRouter::new(inventory))
    }

    /// Create a server around a pre-built protocol router.
    pub fn with_router(config: ServiceConfig, ais_router: AisRouter) -> Self {
        let ais = &config.ais;
        let mounts = MountTable::new(vec![
            Mount::new(ais.prefix.clone(), &ais.external_url, false),
            Mount::new(ais.library_prefix.clone(), &ais.external_url, true),
        ]);
        let agent_header = HeaderName::from_bytes(ais.agent_header.as_bytes())
            .unwrap_or_else(|_| HeaderName::from_static("x-agent-id"));

        let state = AppState {
            router: Arc::new(ais_router),
            mounts: Arc::new(mounts),
            agent_header,
            library_owner: ais.library_owner,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(ais_handler))
            .route("/", any(ais_handler))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            prefix = %self.config.ais.prefix,
            library_prefix = %self.config.ais.library_prefix,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Protocol entry point for every path.
async fn ais_handler(State(state): State<AppState>, request: Request) -> Response {
    let start = Instant::now();
    let request_id = request.request_id().to_string();
    let method = request.method().clone();
    let url = raw_url(request.uri()).to_string();

    let mount = match state.mounts.find(&url) {
        Some(mount) => mount.clone(),
        None => {
            tracing::debug!(request_id = %request_id, url = %url, "No mount matched");
            metrics::record_request("none", StatusCode::NOT_FOUND.as_u16(), start);
            return AisResponse::not_found().into_response();
        }
    };

    let agent = if mount.is_library() {
        state.library_owner
    } else {
        match agent_from_headers(request.headers(), &state.agent_header) {
            Some(agent) => agent,
            None => {
                tracing::warn!(request_id = %request_id, url = %url, "Missing or invalid agent header");
                metrics::record_request("none", StatusCode::NOT_FOUND.as_u16(), start);
                return AisResponse::error(
                    StatusCode::NOT_FOUND,
                    AisErrorCode::AgentNotFound,
                    "Agent Not Found",
                )
                .into_response();
            }
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        url = %url,
        agent = %agent,
        "Handling inventory request"
    );

    let router = state.router.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let request = AisRequest {
            method,
            raw_url: &url,
            agent,
        };
        router.dispatch(&mount, &request)
    })
    .await;

    match outcome {
        Ok(Some(response)) => response.into_response(),
        Ok(None) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() =
                StatusCode::from_u16(CLIENT_CLOSED_REQUEST).unwrap_or(StatusCode::BAD_REQUEST);
            response
        }
        Err(e) => {
            tracing::debug!(request_id = %request_id, error = %e, "Dispatch task failed");
            metrics::record_request("none", StatusCode::INTERNAL_SERVER_ERROR.as_u16(), start);
            AisResponse::internal_error().into_response()
        }
    }
}
