//! Agent Inventory Service protocol core.
//!
//! # Data Flow
//! ```text
//! routing::router (builds RequestContext)
//!     → handlers (item / category)
//!         → resolver.rs (token → folder, request-scoped cache)
//!         → href.rs (folder → canonical href)
//!         → http::response::AisResponse (body + error_code)
//! ```
//!
//! # Design Decisions
//! - Resolution failures are `Ok(None)`, never errors
//! - System keywords come from one table, so lookup and href rendering
//!   cannot drift apart
//! - Nothing here is shared between requests

pub mod context;
pub mod error;
pub mod href;
pub mod resolver;
pub mod system_folders;

pub use context::{RequestContext, DEPTH_UNBOUNDED};
pub use error::{AisError, AisErrorCode, AisResult};
pub use resolver::FolderResolver;
pub use system_folders::SystemFolder;
