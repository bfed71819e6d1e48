//! Centralized configuration (environment variables + defaults).

use crate::app::{IdStrategy, StoreOptions};
use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Listen address (`CATALOG_BIND_ADDR`, default `0.0.0.0:3000`).
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("CATALOG_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse::<SocketAddr>()
        .with_context(|| format!("CATALOG_BIND_ADDR must be a socket address, got {:?}", raw))
}

/// Directory for the file-backed store (`CATALOG_STORAGE_DIR`).
///
/// Unset or empty means the volatile in-memory backend.
pub fn storage_dir() -> Option<PathBuf> {
    std::env::var("CATALOG_STORAGE_DIR")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Id allocation policy (`CATALOG_ID_STRATEGY`: `monotonic` | `length`, default `monotonic`).
pub fn id_strategy() -> anyhow::Result<IdStrategy> {
    match std::env::var("CATALOG_ID_STRATEGY") {
        Ok(raw) if !raw.trim().is_empty() => raw.parse::<IdStrategy>().context("CATALOG_ID_STRATEGY"),
        _ => Ok(IdStrategy::default()),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub storage_dir: Option<PathBuf>,
    pub store: StoreOptions,
}

impl Config {
    /// Loads `.env` (if present) and reads every setting, failing on the first invalid one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            bind_addr: bind_addr()?,
            storage_dir: storage_dir(),
            store: StoreOptions {
                id_strategy: id_strategy()?,
            },
        })
    }

    pub fn backend_label(&self) -> String {
        match &self.storage_dir {
            Some(dir) => format!("file:{}", dir.display()),
            None => "memory".to_string(),
        }
    }
}
