use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which backend the history store writes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackendKind {
    /// One JSON file per key under `data_dir`. The default.
    Fs,
    /// Process-local only; history is lost on restart.
    Memory,
}

impl FromStr for StorageBackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fs" => Ok(StorageBackendKind::Fs),
            "memory" => Ok(StorageBackendKind::Memory),
            other => bail!("STORAGE_BACKEND must be 'fs' or 'memory', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare environment still boots.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub storage_backend: StorageBackendKind,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            storage_backend: std::env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "fs".to_string())
                .parse()?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!(
            "fs".parse::<StorageBackendKind>().unwrap(),
            StorageBackendKind::Fs
        );
        assert_eq!(
            "memory".parse::<StorageBackendKind>().unwrap(),
            StorageBackendKind::Memory
        );
        assert!("disk".parse::<StorageBackendKind>().is_err());
    }
}
