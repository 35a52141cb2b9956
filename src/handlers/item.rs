//! Item resources.

use axum::http::Method;
use uuid::Uuid;

use super::{describe_item, method_not_allowed, ResourceHandler};
use crate::ais::{AisResult, FolderResolver, RequestContext};
use crate::http::AisResponse;

/// Serves `GET <prefix>/item/<id>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemHandler;

impl ResourceHandler for ItemHandler {
    fn handle(&self, ctx: &RequestContext<'_>, segments: &[&str]) -> AisResult<AisResponse> {
        let id = match segments {
            [_, token] => match Uuid::parse_str(token) {
                Ok(id) => id,
                Err(_) => return Ok(AisResponse::not_found()),
            },
            _ => return Ok(AisResponse::not_found()),
        };
        if ctx.method != Method::GET {
            return Ok(method_not_allowed());
        }

        let item = match ctx.inventory.item(ctx.agent, id)? {
            Some(item) => item,
            None => return Ok(AisResponse::not_found()),
        };

        let mut folders = FolderResolver::new(ctx);
        Ok(AisResponse::success(describe_item(&mut folders, &item)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::resolver::tests::{context, populated, system_id, AGENT};
    use crate::ais::AisErrorCode;
    use crate::inventory::{AssetType, InventoryItem};
    use crate::llsd::Value;
    use axum::http::StatusCode;

    fn hat(parent: Uuid) -> InventoryItem {
        InventoryItem {
            id: Uuid::from_u128(0x1234),
            parent_id: parent,
            owner: AGENT,
            creator: AGENT,
            name: "Hat".into(),
            description: "A hat".into(),
            asset_id: Uuid::from_u128(0x5678),
            asset_type: AssetType::Clothing,
            inv_type: 18,
            flags: 0x8000_0001,
            creation_date: 1_700_000_000,
        }
    }

    fn parent_href(body: &crate::llsd::Map) -> &str {
        body["_links"].as_map().unwrap()["parent"].as_map().unwrap()["href"]
            .as_str()
            .unwrap()
    }

    #[test]
    fn test_get_item() {
        let inv = populated();
        // Clothing system folder is table index 2.
        inv.inner.insert_item(hat(system_id(2)));
        let ctx = context(&inv);

        let res = ItemHandler
            .handle(&ctx, &["item", "00000000-0000-0000-0000-000000001234"])
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body()["name"], Value::from("Hat"));
        assert_eq!(res.body()["flags"], Value::Integer(0x8000_0001u32 as i32));
        assert_eq!(parent_href(res.body()), "http://ais.test/aisv3/category/clothing");
    }

    #[test]
    fn test_creation_date_saturates() {
        for (stored, shown) in [
            (i64::MIN, i32::MIN),
            (i32::MIN as i64 - 1, i32::MIN),
            (-5, -5),
            (i32::MAX as i64 + 1, i32::MAX),
        ] {
            let inv = populated();
            let mut item = hat(system_id(2));
            item.creation_date = stored;
            inv.inner.insert_item(item);
            let ctx = context(&inv);

            let res = ItemHandler
                .handle(&ctx, &["item", "00000000-0000-0000-0000-000000001234"])
                .unwrap();
            assert_eq!(
                res.body().get("created_at").and_then(Value::as_integer),
                Some(shown),
                "{stored}"
            );
        }
    }

    #[test]
    fn test_orphan_item_parent_unknown() {
        let inv = populated();
        inv.inner.insert_item(hat(Uuid::from_u128(0xDEAD)));
        let ctx = context(&inv);

        let res = ItemHandler
            .handle(&ctx, &["item", "00000000-0000-0000-0000-000000001234"])
            .unwrap();
        assert_eq!(parent_href(res.body()), "http://ais.test/aisv3/category/unknown");
    }

    #[test]
    fn test_missing_or_malformed() {
        let inv = populated();
        let ctx = context(&inv);

        for segments in [
            vec!["item", "not-a-uuid"],
            vec!["item", "00000000-0000-0000-0000-00000000ffff"],
            vec!["item"],
        ] {
            let res = ItemHandler.handle(&ctx, &segments).unwrap();
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            assert_eq!(res.error_code(), Some(AisErrorCode::NotFound));
        }
    }

    #[test]
    fn test_put_not_allowed() {
        let inv = populated();
        inv.inner.insert_item(hat(system_id(2)));
        let mut ctx = context(&inv);
        ctx.method = Method::PUT;
        let res = ItemHandler
            .handle(&ctx, &["item", "00000000-0000-0000-0000-000000001234"])
            .unwrap();
        assert_eq!(res.error_code(), Some(AisErrorCode::MethodNotAllowed));
    }
}
