//! In-memory inventory store.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use super::{AssetType, InventoryFolder, InventoryItem, InventoryResult, InventoryService};

/// On-disk seed layout.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InventorySeed {
    #[serde(default)]
    pub folders: Vec<InventoryFolder>,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

/// A thread-safe inventory store shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    folders: Arc<DashMap<Uuid, InventoryFolder>>,
    items: Arc<DashMap<Uuid, InventoryItem>>,
}

impl MemoryInventory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load folders and items from a JSON seed file.
    pub fn load_from_file(path: &Path) -> InventoryResult<Self> {
        let store = Self::new();
        let reader = BufReader::new(File::open(path)?);
        let seed: InventorySeed = serde_json::from_reader(reader)?;

        for folder in seed.folders {
            store.insert_folder(folder);
        }
        for item in seed.items {
            store.insert_item(item);
        }
        tracing::info!(
            folders = store.folders.len(),
            items = store.items.len(),
            path = ?path,
            "Loaded inventory seed"
        );
        Ok(store)
    }

    pub fn insert_folder(&self, folder: InventoryFolder) {
        self.folders.insert(folder.id, folder);
    }

    pub fn insert_item(&self, item: InventoryItem) {
        self.items.insert(item.id, item);
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    fn owned_folder(&self, agent: Uuid, id: Uuid) -> Option<InventoryFolder> {
        self.folders
            .get(&id)
            .filter(|f| f.owner == agent)
            .map(|f| f.value().clone())
    }
}

impl InventoryService for MemoryInventory {
    fn folder(&self, agent: Uuid, id: Uuid) -> InventoryResult<Option<InventoryFolder>> {
        Ok(self.owned_folder(agent, id))
    }

    fn folder_by_type(&self, agent: Uuid, ty: AssetType) -> InventoryResult<Option<InventoryFolder>> {
        let candidates: Vec<InventoryFolder> = self
            .folders
            .iter()
            .filter(|f| f.owner == agent && f.default_type == ty)
            .map(|f| f.value().clone())
            .collect();

        if ty == AssetType::RootFolder {
            return Ok(candidates.into_iter().find(|f| f.is_root()));
        }

        // Prefer the instance sitting directly under the root.
        let direct = candidates.iter().position(|f| {
            self.owned_folder(agent, f.parent_id)
                .map(|p| p.is_root())
                .unwrap_or(false)
        });
        Ok(match direct {
            Some(i) => candidates.into_iter().nth(i),
            None => candidates.into_iter().next(),
        })
    }

    fn child_folders(&self, agent: Uuid, id: Uuid) -> InventoryResult<Vec<InventoryFolder>> {
        let mut children: Vec<InventoryFolder> = self
            .folders
            .iter()
            .filter(|f| f.owner == agent && f.parent_id == id && !f.is_root())
            .map(|f| f.value().clone())
            .collect();
        children.sort_by_key(|f| f.id);
        Ok(children)
    }

    fn folder_items(&self, agent: Uuid, id: Uuid) -> InventoryResult<Vec<InventoryItem>> {
        let mut items: Vec<InventoryItem> = self
            .items
            .iter()
            .filter(|i| i.owner == agent && i.parent_id == id)
            .map(|i| i.value().clone())
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    fn item(&self, agent: Uuid, id: Uuid) -> InventoryResult<Option<InventoryItem>> {
        Ok(self
            .items
            .get(&id)
            .filter(|i| i.owner == agent)
            .map(|i| i.value().clone()))
    }
}
