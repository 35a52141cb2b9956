//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming raw URL (path + query)
//!     → matcher.rs (mount prefix check and strip)
//!     → path.rs (segments + raw options)
//!     → options.rs (depth, simulate)
//!     → router.rs (dispatch on leading segment)
//!     → Return: AisResponse, or nothing if the peer is gone
//! ```
//!
//! # Design Decisions
//! - Mounts fixed at startup, immutable at runtime
//! - No regex: literal prefix and segment matching only
//! - Deterministic: same input always reaches the same handler

pub mod matcher;
pub mod options;
pub mod path;
pub mod router;

pub use matcher::{Mount, MountTable};
pub use options::{interpret_options, RequestOptions};
pub use path::{split_url, ParsedPath};
pub use router::{AisRequest, AisRouter};
