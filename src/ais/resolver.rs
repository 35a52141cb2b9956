//! Folder token resolution with a request-scoped cache.

use std::collections::HashMap;
use uuid::Uuid;

use super::context::RequestContext;
use super::error::AisResult;
use super::system_folders::SystemFolder;
use crate::inventory::InventoryFolder;
use crate::observability::metrics;

/// Resolves folder tokens and ids for one request.
///
/// Every folder fetched from the inventory backend is remembered for the
/// rest of the request, so walking parent chains never asks twice.
#[derive(Debug)]
pub struct FolderResolver<'r, 'a> {
    ctx: &'r RequestContext<'a>,
    cache: HashMap<Uuid, InventoryFolder>,
}

impl<'r, 'a> FolderResolver<'r, 'a> {
    pub fn new(ctx: &'r RequestContext<'a>) -> Self {
        Self {
            ctx,
            cache: HashMap::new(),
        }
    }

    pub fn context(&self) -> &'r RequestContext<'a> {
        self.ctx
    }

    /// Resolve a system keyword or folder id to a folder.
    ///
    /// Unknown keywords and malformed ids resolve to `None`, as does a
    /// missing folder. Only backend failures are errors.
    pub fn resolve_token(&mut self, token: &str) -> AisResult<Option<InventoryFolder>> {
        let found = match SystemFolder::from_keyword(token) {
            Some(system) => {
                metrics::record_folder_lookup("store");
                self.ctx
                    .inventory
                    .folder_by_type(self.ctx.agent, system.asset_type())?
            }
            None => match Uuid::parse_str(token) {
                Ok(id) => {
                    metrics::record_folder_lookup("store");
                    self.ctx.inventory.folder(self.ctx.agent, id)?
                }
                Err(_) => None,
            },
        };
        Ok(found.map(|folder| self.remember(folder)))
    }

    /// Look up a folder by id, consulting the cache first.
    pub fn get(&mut self, id: Uuid) -> AisResult<Option<InventoryFolder>> {
        if let Some(folder) = self.cache.get(&id) {
            metrics::record_folder_lookup("cache");
            return Ok(Some(folder.clone()));
        }
        metrics::record_folder_lookup("store");
        let found = self.ctx.inventory.folder(self.ctx.agent, id)?;
        Ok(found.map(|folder| self.remember(folder)))
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Add a folder obtained elsewhere (e.g. a child listing) to the cache.
    /// The first record seen for an id wins for the rest of the request.
    pub fn remember(&mut self, folder: InventoryFolder) -> InventoryFolder {
        self.cache.entry(folder.id).or_insert(folder).clone()
    }
}
