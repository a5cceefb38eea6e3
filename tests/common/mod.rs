//! Shared test utilities: temp stores and a live API server.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use tokio::task::JoinHandle;

use stockroom::api::{ApiServer, ServerHandle};
use stockroom::inventory::{Category, InventoryService, NewItem};
use stockroom::store::FileStore;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
    pub data_file: PathBuf,
    pub handle: ServerHandle,
    pub task: JoinHandle<()>,
    _dir: TempDir,
}

/// Bind a real server on port 0 over a fresh temp store.
///
/// The listener is bound before the serve task is spawned, so requests
/// can be issued immediately without sleeping.
pub async fn spawn_server() -> TestServer {
    let dir = TempDir::new().expect("failed to create temp dir");
    let data_file = dir.path().join("inventory.json");
    let service = InventoryService::new(Arc::new(FileStore::new(data_file.clone())));

    let mut server = ApiServer::new(service);
    let addr = server.bind("127.0.0.1:0").await.expect("failed to bind");
    let handle = server.handle();
    let task = tokio::spawn(async move {
        let _ = server.run().await;
    });

    TestServer {
        addr,
        base_url: format!("http://{addr}"),
        data_file,
        handle,
        task,
        _dir: dir,
    }
}

pub fn pen() -> NewItem {
    NewItem {
        name: "Pen".to_string(),
        quantity: 10,
        price: 1.5,
        category: Category::OfficeSupplies,
    }
}

pub fn desk() -> NewItem {
    NewItem {
        name: "Desk".to_string(),
        quantity: 2,
        price: 120.0,
        category: Category::Furniture,
    }
}
