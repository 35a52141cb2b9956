//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, mount + agent selection)
//!     → request.rs (request ID, agent header)
//!     → routing::AisRouter (on the blocking pool)
//!     → response.rs (LLSD body, status, reason phrase)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::AisResponse;
pub use server::HttpServer;
