use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Base URL client commands talk to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the flat-file inventory document.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3009".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:3009".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from("inventory.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            base_url: default_base_url(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}
