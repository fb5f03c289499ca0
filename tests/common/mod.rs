//! Shared testing utilities for rocketcart integration tests.

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CART_KEY: &str = "@RocketShoes:cart";

/// Testing harness providing an isolated workspace and a fake storefront API.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    server: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, server: Server::new() }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Base URL of the fake storefront.
    pub fn api_url(&self) -> String {
        self.server.url()
    }

    /// Build a command for invoking the compiled `rocketcart` binary within the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rocketcart").expect("Failed to locate rocketcart binary");
        cmd.current_dir(&self.work_dir)
            .env("ROCKETCART_API_URL", self.api_url())
            .env("HOME", self.root.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Serve `GET /stock/{id}`.
    pub fn mock_stock(&mut self, id: u32, amount: i64) -> Mock {
        self.server
            .mock("GET", format!("/stock/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"id": {id}, "amount": {amount}}}"#))
            .create()
    }

    /// Serve `GET /products/{id}`.
    pub fn mock_product(&mut self, id: u32, title: &str, price: f64) -> Mock {
        self.server
            .mock("GET", format!("/products/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": id,
                    "title": title,
                    "price": price,
                    "image": format!("https://cdn.test/{id}.jpg"),
                })
                .to_string(),
            )
            .create()
    }

    /// Path to the local storage file.
    pub fn storage_path(&self) -> PathBuf {
        self.work_dir.join(".rocketcart").join("local_storage.json")
    }

    /// Write a raw value under the cart key.
    pub fn seed_cart_raw(&self, value: &str) {
        let mut entries = BTreeMap::new();
        entries.insert(CART_KEY.to_string(), value.to_string());
        let path = self.storage_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string(&entries).unwrap()).unwrap();
    }

    /// Overwrite the whole storage file with `content`.
    pub fn write_storage_file(&self, content: &str) {
        let path = self.storage_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Seed the cart with `(id, amount)` line items.
    pub fn seed_cart(&self, entries: &[(u32, u32)]) {
        let items: Vec<Value> = entries
            .iter()
            .map(|&(id, amount)| {
                serde_json::json!({
                    "id": id,
                    "title": format!("Sneaker {id}"),
                    "price": 100.0,
                    "image": format!("https://cdn.test/{id}.jpg"),
                    "amount": amount,
                })
            })
            .collect();
        self.seed_cart_raw(&serde_json::to_string(&items).unwrap());
    }

    /// Cart items currently persisted, or `None` if the key is absent.
    pub fn persisted_cart(&self) -> Option<Vec<Value>> {
        let content = fs::read_to_string(self.storage_path()).ok()?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        let raw = entries.get(CART_KEY)?;
        Some(serde_json::from_str(raw).unwrap())
    }

    /// `(id, amount)` pairs of the persisted cart, empty when nothing is stored.
    pub fn persisted_amounts(&self) -> Vec<(u64, u64)> {
        self.persisted_cart()
            .unwrap_or_default()
            .iter()
            .map(|item| (item["id"].as_u64().unwrap(), item["amount"].as_u64().unwrap()))
            .collect()
    }

    /// Write `.rocketcart/config.toml`.
    pub fn write_config(&self, content: &str) {
        let dir = self.work_dir.join(".rocketcart");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }
}
