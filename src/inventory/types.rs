//! Inventory records and asset-type tags.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Asset-type tag carried by folders (as their default type) and items.
///
/// Numeric codes are the protocol values; anything unrecognised is kept
/// in `Other` so a record survives a load/serialize cycle unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "i32", into = "i32")]
pub enum AssetType {
    Unknown,
    Texture,
    Sound,
    CallingCard,
    Landmark,
    Clothing,
    Object,
    Notecard,
    Folder,
    RootFolder,
    LSLText,
    LSLBytecode,
    Bodypart,
    TrashFolder,
    SnapshotFolder,
    LostAndFoundFolder,
    Animation,
    Gesture,
    FavoriteFolder,
    Link,
    LinkFolder,
    CurrentOutfitFolder,
    OutfitFolder,
    MyOutfitsFolder,
    Mesh,
    Inbox,
    Outbox,
    Other(i32),
}

impl AssetType {
    /// Protocol code for this asset type.
    pub fn code(self) -> i32 {
        match self {
            AssetType::Unknown => -1,
            AssetType::Texture => 0,
            AssetType::Sound => 1,
            AssetType::CallingCard => 2,
            AssetType::Landmark => 3,
            AssetType::Clothing => 5,
            AssetType::Object => 6,
            AssetType::Notecard => 7,
            AssetType::Folder => 8,
            AssetType::RootFolder => 9,
            AssetType::LSLText => 10,
            AssetType::LSLBytecode => 11,
            AssetType::Bodypart => 13,
            AssetType::TrashFolder => 14,
            AssetType::SnapshotFolder => 15,
            AssetType::LostAndFoundFolder => 16,
            AssetType::Animation => 20,
            AssetType::Gesture => 21,
            AssetType::FavoriteFolder => 23,
            AssetType::Link => 24,
            AssetType::LinkFolder => 25,
            AssetType::CurrentOutfitFolder => 46,
            AssetType::OutfitFolder => 47,
            AssetType::MyOutfitsFolder => 48,
            AssetType::Mesh => 49,
            AssetType::Inbox => 50,
            AssetType::Outbox => 51,
            AssetType::Other(code) => code,
        }
    }

    /// Map a protocol code back to an asset type.
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => AssetType::Unknown,
            0 => AssetType::Texture,
            1 => AssetType::Sound,
            2 => AssetType::CallingCard,
            3 => AssetType::Landmark,
            5 => AssetType::Clothing,
            6 => AssetType::Object,
            7 => AssetType::Notecard,
            8 => AssetType::Folder,
            9 => AssetType::RootFolder,
            10 => AssetType::LSLText,
            11 => AssetType::LSLBytecode,
            13 => AssetType::Bodypart,
            14 => AssetType::TrashFolder,
            15 => AssetType::SnapshotFolder,
            16 => AssetType::LostAndFoundFolder,
            20 => AssetType::Animation,
            21 => AssetType::Gesture,
            23 => AssetType::FavoriteFolder,
            24 => AssetType::Link,
            25 => AssetType::LinkFolder,
            46 => AssetType::CurrentOutfitFolder,
            47 => AssetType::OutfitFolder,
            48 => AssetType::MyOutfitsFolder,
            49 => AssetType::Mesh,
            50 => AssetType::Inbox,
            51 => AssetType::Outbox,
            other => AssetType::Other(other),
        }
    }
}

impl From<i32> for AssetType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<AssetType> for i32 {
    fn from(ty: AssetType) -> Self {
        ty.code()
    }
}

/// A folder ("category") in an agent's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InventoryFolder {
    pub id: Uuid,
    /// Nil for the inventory root.
    pub parent_id: Uuid,
    pub owner: Uuid,
    pub name: String,
    #[serde(default = "default_folder_type")]
    pub default_type: AssetType,
    #[serde(default)]
    pub version: i32,
}

fn default_folder_type() -> AssetType {
    AssetType::Unknown
}

impl InventoryFolder {
    /// True when this folder has no parent, i.e. it is the inventory root.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_nil()
    }
}

/// An item in an agent's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub owner: Uuid,
    #[serde(default)]
    pub creator: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub asset_id: Uuid,
    pub asset_type: AssetType,
    #[serde(default)]
    pub inv_type: i32,
    #[serde(default)]
    pub flags: u32,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub creation_date: i64,
}

/// Failures reported by an inventory backend.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Backend could not be reached.
    #[error("inventory backend unavailable: {0}")]
    Unavailable(String),

    /// Backend returned data that violates tree consistency.
    #[error("inventory data corrupt: {0}")]
    Corrupt(String),

    #[error("inventory seed IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("inventory seed parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
