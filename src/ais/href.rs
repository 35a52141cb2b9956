//! Canonical folder hrefs.
//!
//! The inventory root is always `…/category/root`. A system folder sitting
//! directly under the root is addressed by its keyword; every other folder
//! by its id.

use uuid::Uuid;

use super::error::AisResult;
use super::resolver::FolderResolver;
use super::system_folders::SystemFolder;
use crate::inventory::InventoryFolder;

impl FolderResolver<'_, '_> {
    /// Canonical href of a resolved folder.
    pub fn folder_href(&mut self, folder: &InventoryFolder) -> AisResult<String> {
        let ctx = self.context();
        if folder.is_root() {
            return Ok(ctx.category_href(SystemFolder::Root.keyword()));
        }

        if let Some(parent) = self.get(folder.parent_id)? {
            if parent.is_root() {
                if let Some(system) = SystemFolder::from_asset_type(folder.default_type) {
                    return Ok(ctx.category_href(system.keyword()));
                }
            }
        }

        Ok(ctx.category_href(folder.id))
    }

    /// Canonical href of a folder known only by id; unresolvable ids map
    /// to `…/category/unknown`.
    pub fn folder_href_by_id(&mut self, id: Uuid) -> AisResult<String> {
        match self.get(id)? {
            Some(folder) => self.folder_href(&folder),
            None => Ok(self.context().category_href("unknown")),
        }
    }
}
