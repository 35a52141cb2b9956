//! Item and category resource handlers.
//!
//! # Data Flow
//! ```text
//! routing::router
//!     → "item"     → item.rs
//!     → "category" → category.rs
//!         → ais::FolderResolver (resolution + hrefs)
//!         → http::AisResponse
//! ```
//!
//! # Design Decisions
//! - Handlers return `Ok` for every outcome the client should see,
//!   including protocol errors; `Err` means the router must step in
//! - Only reads are served; mutating methods answer 405

pub mod category;
pub mod item;

use axum::http::StatusCode;

use crate::ais::{AisErrorCode, AisResult, FolderResolver, RequestContext};
use crate::http::AisResponse;
use crate::inventory::InventoryItem;
use crate::llsd::{href_link, Map, Value};

pub use category::CategoryHandler;
pub use item::ItemHandler;

/// A family of resources reachable under one leading path segment.
pub trait ResourceHandler: Send + Sync {
    /// Handle a request. `segments` still includes the family segment.
    fn handle(&self, ctx: &RequestContext<'_>, segments: &[&str]) -> AisResult<AisResponse>;
}

pub(crate) fn method_not_allowed() -> AisResponse {
    AisResponse::error(
        StatusCode::METHOD_NOT_ALLOWED,
        AisErrorCode::MethodNotAllowed,
        "Method Not Allowed",
    )
}

/// LLSD description of an item, with self and parent links.
pub(crate) fn describe_item(folders: &mut FolderResolver<'_, '_>, item: &InventoryItem) -> AisResult<Map> {
    let ctx = folders.context();
    let mut m = Map::new();
    m.insert("item_id".into(), Value::Uuid(item.id));
    m.insert("parent_id".into(), Value::Uuid(item.parent_id));
    m.insert("agent_id".into(), Value::Uuid(item.owner));
    m.insert("creator_id".into(), Value::Uuid(item.creator));
    m.insert("name".into(), Value::from(item.name.as_str()));
    m.insert("desc".into(), Value::from(item.description.as_str()));
    m.insert("asset_id".into(), Value::Uuid(item.asset_id));
    m.insert("type".into(), Value::Integer(item.asset_type.code()));
    m.insert("inv_type".into(), Value::Integer(item.inv_type));
    // LLSD integers are 32-bit signed; flags are carried bit-for-bit.
    m.insert("flags".into(), Value::Integer(item.flags as i32));
    m.insert(
        "created_at".into(),
        Value::Integer(item.creation_date.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
    );

    let mut links = Map::new();
    links.insert("self".into(), href_link(ctx.item_href(item.id)));
    links.insert("parent".into(), href_link(folders.folder_href_by_id(item.parent_id)?));
    m.insert("_links".into(), Value::Map(links));
    Ok(m)
}
