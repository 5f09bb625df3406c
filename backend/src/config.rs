//! Runtime configuration read from the environment (and `.env`, if present).

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite:records.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origin allowed by CORS (the Trunk dev server by default)
    pub frontend_origin: String,
    /// Built frontend assets served for non-API paths
    pub static_dir: PathBuf,
    /// Wipe and repopulate the tables with demo records at startup
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR: {}", bind_addr))?;

        let seed_demo_data = lookup("SEED_DEMO_DATA")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr,
            frontend_origin: get("FRONTEND_ORIGIN", DEFAULT_FRONTEND_ORIGIN),
            static_dir: PathBuf::from(get("STATIC_DIR", DEFAULT_STATIC_DIR)),
            seed_demo_data,
        })
    }
}
