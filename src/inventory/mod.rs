//! Inventory storage collaborator.
//!
//! # Data Flow
//! ```text
//! ais::resolver / handlers
//!     → InventoryService (trait, synchronous)
//!     → memory.rs (DashMap-backed store) or any other backend
//! ```
//!
//! # Design Decisions
//! - Lookups return `Ok(None)` for absence; `Err` is reserved for backend failure
//! - Calls may block; the HTTP layer runs them on the blocking pool
//! - Every lookup is scoped by the acting agent

pub mod memory;
pub mod types;

use uuid::Uuid;

pub use memory::MemoryInventory;
pub use types::{AssetType, InventoryError, InventoryFolder, InventoryItem};

/// Result type for inventory backend calls.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Folder and item queries consumed by the protocol core.
pub trait InventoryService: Send + Sync {
    /// Look up a folder by identifier.
    fn folder(&self, agent: Uuid, id: Uuid) -> InventoryResult<Option<InventoryFolder>>;

    /// Look up "the" folder of the given system type for the agent.
    fn folder_by_type(&self, agent: Uuid, ty: AssetType) -> InventoryResult<Option<InventoryFolder>>;

    /// Direct child folders of a folder.
    fn child_folders(&self, agent: Uuid, id: Uuid) -> InventoryResult<Vec<InventoryFolder>>;

    /// Items directly inside a folder.
    fn folder_items(&self, agent: Uuid, id: Uuid) -> InventoryResult<Vec<InventoryItem>>;

    /// Look up an item by identifier.
    fn item(&self, agent: Uuid, id: Uuid) -> InventoryResult<Option<InventoryItem>>;
}
