//! Startup sequencing.
//!
//! Order: config (already validated) → inventory store → HTTP server.

use std::path::Path;
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::inventory::{InventoryError, InventoryService, MemoryInventory};

/// Build the inventory backend described by the configuration.
pub fn build_inventory(config: &ServiceConfig) -> Result<Arc<dyn InventoryService>, InventoryError> {
    let store = match &config.inventory.seed_path {
        Some(path) => MemoryInventory::load_from_file(Path::new(path))?,
        None => {
            tracing::warn!("No inventory seed configured; starting with an empty store");
            MemoryInventory::new()
        }
    };
    Ok(Arc::new(store))
}
