//! Category (folder) resources.

use axum::http::Method;
use std::collections::HashSet;
use uuid::Uuid;

use super::{describe_item, method_not_allowed, ResourceHandler};
use crate::ais::{AisResult, FolderResolver, RequestContext};
use crate::http::AisResponse;
use crate::inventory::{InventoryError, InventoryFolder};

/// Deepest level of `_embedded` nesting produced, whatever `depth` asks for.
pub const MAX_EMBED_DEPTH: i32 = 128;
use crate::llsd::{href_link, Map, Value};

/// Serves `GET <prefix>/category/<token>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryHandler;

impl ResourceHandler for CategoryHandler {
    fn handle(&self, ctx: &RequestContext<'_>, segments: &[&str]) -> AisResult<AisResponse> {
        let token = match segments {
            [_, token] => *token,
            _ => return Ok(AisResponse::not_found()),
        };
        if ctx.method != Method::GET {
            return Ok(method_not_allowed());
        }

        let mut folders = FolderResolver::new(ctx);
        let folder = match folders.resolve_token(token)? {
            Some(folder) => folder,
            None => return Ok(AisResponse::not_found()),
        };

        let depth = ctx.depth.min(MAX_EMBED_DEPTH);
        let body = describe_folder(&mut folders, &folder, depth, &mut HashSet::new())?;
        Ok(AisResponse::success(body))
    }
}

/// LLSD description of a folder, embedding children down to `depth`.
///
/// `visited` holds every folder described so far in this response; meeting
/// one again means the store's parent links form a cycle.
fn describe_folder(
    folders: &mut FolderResolver<'_, '_>,
    folder: &InventoryFolder,
    depth: i32,
    visited: &mut HashSet<Uuid>,
) -> AisResult<Map> {
    if !visited.insert(folder.id) {
        return Err(InventoryError::Corrupt(format!("folder {} is its own ancestor", folder.id)).into());
    }

    let ctx = folders.context();
    let mut m = Map::new();
    m.insert("category_id".into(), Value::Uuid(folder.id));
    m.insert("parent_id".into(), Value::Uuid(folder.parent_id));
    m.insert("agent_id".into(), Value::Uuid(folder.owner));
    m.insert("name".into(), Value::from(folder.name.as_str()));
    m.insert("type_default".into(), Value::Integer(folder.default_type.code()));
    m.insert("version".into(), Value::Integer(folder.version));

    let mut links = Map::new();
    links.insert("self".into(), href_link(folders.folder_href(folder)?));
    if !folder.is_root() {
        links.insert("parent".into(), href_link(folders.folder_href_by_id(folder.parent_id)?));
    }
    m.insert("_links".into(), Value::Map(links));

    if depth > 0 {
        let mut categories = Map::new();
        for child in ctx.inventory.child_folders(ctx.agent, folder.id)? {
            let child = folders.remember(child);
            categories.insert(child.id.to_string(), Value::Map(describe_folder(folders, &child, depth - 1, visited)?));
        }

        let mut items = Map::new();
        for item in ctx.inventory.folder_items(ctx.agent, folder.id)? {
            items.insert(item.id.to_string(), Value::Map(describe_item(folders, &item)?));
        }

        let mut embedded = Map::new();
        embedded.insert("categories".into(), Value::Map(categories));
        embedded.insert("items".into(), Value::Map(items));
        m.insert("_embedded".into(), Value::Map(embedded));
    }

    Ok(m)
}
