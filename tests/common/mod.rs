//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use ais_server::ais::SystemFolder;
use ais_server::config::ServiceConfig;
use ais_server::inventory::{AssetType, InventoryFolder, InventoryItem, MemoryInventory};
use ais_server::{HttpServer, Shutdown};
use axum::body::Body;
use axum::http::{Request, Response};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const AGENT: Uuid = Uuid::from_u128(0xA6E7);
pub const LIBRARY_OWNER: Uuid = Uuid::from_u128(0x11B);
pub const ROOT: Uuid = Uuid::from_u128(0x100);
pub const LIBRARY_ROOT: Uuid = Uuid::from_u128(0x1100);
pub const USER_FOLDER: Uuid = Uuid::from_u128(0x800);
pub const HAT: Uuid = Uuid::from_u128(0x1234);

pub fn system_folder_id(system: SystemFolder) -> Uuid {
    Uuid::from_u128(0x200 + system as u128)
}

/// An agent inventory with every system folder under the root, one user
/// folder holding an item, and a one-folder library.
pub fn seeded_inventory() -> MemoryInventory {
    let store = MemoryInventory::new();
    store.insert_folder(InventoryFolder {
        id: ROOT,
        parent_id: Uuid::nil(),
        owner: AGENT,
        name: "My Inventory".into(),
        default_type: AssetType::RootFolder,
        version: 3,
    });
    for system in SystemFolder::all().filter(|s| *s != SystemFolder::Root) {
        store.insert_folder(InventoryFolder {
            id: system_folder_id(system),
            parent_id: ROOT,
            owner: AGENT,
            name: system.keyword().to_string(),
            default_type: system.asset_type(),
            version: 1,
        });
    }
    store.insert_folder(InventoryFolder {
        id: USER_FOLDER,
        parent_id: ROOT,
        owner: AGENT,
        name: "Stuff".into(),
        default_type: AssetType::Folder,
        version: 1,
    });
    store.insert_item(InventoryItem {
        id: HAT,
        parent_id: USER_FOLDER,
        owner: AGENT,
        creator: AGENT,
        name: "Hat".into(),
        description: "Wide brim".into(),
        asset_id: Uuid::from_u128(0x5678),
        asset_type: AssetType::Clothing,
        inv_type: 18,
        flags: 0,
        creation_date: 1_700_000_000,
    });
    store.insert_folder(InventoryFolder {
        id: LIBRARY_ROOT,
        parent_id: Uuid::nil(),
        owner: LIBRARY_OWNER,
        name: "Library".into(),
        default_type: AssetType::RootFolder,
        version: 1,
    });
    store
}

pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.ais.external_url = "http://ais.test".into();
    config.ais.library_owner = LIBRARY_OWNER;
    config
}

pub fn test_server() -> HttpServer {
    HttpServer::new(test_config(), Arc::new(seeded_inventory()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-agent-id", AGENT.to_string())
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start the server on an ephemeral port; returns its address and the
/// shutdown coordinator.
pub async fn start_live_server() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = test_server();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    (addr, shutdown)
}
