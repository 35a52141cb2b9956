//! Well-known system folders and their short keywords.
//!
//! A single table drives both directions: keyword → asset type when a
//! client addresses a folder, and asset type → keyword when rendering the
//! href of a folder sitting directly under the inventory root.

use crate::inventory::AssetType;

/// One of the fixed per-agent system folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemFolder {
    Animation,
    Bodypart,
    Clothing,
    CurrentOutfit,
    Favorite,
    Gesture,
    Inbox,
    Landmark,
    LslText,
    LostAndFound,
    MyOutfits,
    Notecard,
    Object,
    Outbox,
    Root,
    Snapshot,
    Sound,
    Texture,
    Trash,
}

/// Keyword and asset type of every system folder.
const TABLE: [(SystemFolder, &str, AssetType); 19] = [
    (SystemFolder::Animation, "animatn", AssetType::Animation),
    (SystemFolder::Bodypart, "bodypart", AssetType::Bodypart),
    (SystemFolder::Clothing, "clothing", AssetType::Clothing),
    (SystemFolder::CurrentOutfit, "current", AssetType::CurrentOutfitFolder),
    (SystemFolder::Favorite, "favorite", AssetType::FavoriteFolder),
    (SystemFolder::Gesture, "gesture", AssetType::Gesture),
    (SystemFolder::Inbox, "inbox", AssetType::Inbox),
    (SystemFolder::Landmark, "landmark", AssetType::Landmark),
    (SystemFolder::LslText, "lsltext", AssetType::LSLText),
    (SystemFolder::LostAndFound, "lstndfnd", AssetType::LostAndFoundFolder),
    (SystemFolder::MyOutfits, "my_otfts", AssetType::MyOutfitsFolder),
    (SystemFolder::Notecard, "notecard", AssetType::Notecard),
    (SystemFolder::Object, "object", AssetType::Object),
    (SystemFolder::Outbox, "outbox", AssetType::Outbox),
    (SystemFolder::Root, "root", AssetType::RootFolder),
    (SystemFolder::Snapshot, "snapshot", AssetType::SnapshotFolder),
    (SystemFolder::Sound, "sound", AssetType::Sound),
    (SystemFolder::Texture, "texture", AssetType::Texture),
    (SystemFolder::Trash, "trash", AssetType::TrashFolder),
];

impl SystemFolder {
    /// Every system folder, in table order.
    pub fn all() -> impl Iterator<Item = SystemFolder> {
        TABLE.iter().map(|(folder, _, _)| *folder)
    }

    /// Parse a client-supplied keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, kw, _)| *kw == keyword)
            .map(|(folder, _, _)| *folder)
    }

    /// Reverse lookup used for href rendering.
    pub fn from_asset_type(ty: AssetType) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, _, t)| *t == ty)
            .map(|(folder, _, _)| *folder)
    }

    pub fn keyword(self) -> &'static str {
        self.entry().1
    }

    pub fn asset_type(self) -> AssetType {
        self.entry().2
    }

    fn entry(self) -> &'static (SystemFolder, &'static str, AssetType) {
        // Every variant has exactly one row; the table is indexed by variant order.
        &TABLE[self as usize]
    }
}
