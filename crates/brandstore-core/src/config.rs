//! Store and server configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::BrandError;
use crate::Result;

pub const ENV_DATABASE: &str = "BRANDSTORE_DATABASE";
pub const ENV_BIND: &str = "BRANDSTORE_BIND";
pub const ENV_SEED: &str = "BRANDSTORE_SEED";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Address the HTTP server listens on
    pub bind_addr: String,
    /// Insert the default brands on first start
    pub seed: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("brandstore.db"),
            bind_addr: "127.0.0.1:8080".to_string(),
            seed: true,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("brandstore"))
            .unwrap_or_else(|| PathBuf::from(".brandstore"))
    }

    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| BrandError::Config(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| BrandError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `BRANDSTORE_*` overrides from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATABASE) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup(ENV_BIND) {
            self.bind_addr = addr;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = parse_flag(&seed)
                .ok_or_else(|| BrandError::Config(format!("{ENV_SEED}: invalid flag {seed:?}")))?;
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Simple dirs implementation for the platform data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("/tmp/data"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/data/brandstore.db"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert!(config.seed);
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brandstore.json");
        std::fs::write(&path, r#"{ "bind_addr": "0.0.0.0:9000", "seed": false }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert!(!config.seed);
        assert!(config.database_path.ends_with("brandstore.db"));
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config::from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, BrandError::Config(_)));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(BrandError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_DATABASE, "/var/lib/brands.db"),
            (ENV_BIND, "0.0.0.0:80"),
            (ENV_SEED, "off"),
        ]
        .into_iter()
        .collect();

        let config = Config::new(PathBuf::from("/tmp"))
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/brands.db"));
        assert_eq!(config.bind_addr, "0.0.0.0:80");
        assert!(!config.seed);
    }

    #[test]
    fn test_invalid_seed_flag() {
        let result = Config::new(PathBuf::from("/tmp")).with_overrides(|key| {
            (key == ENV_SEED).then(|| "maybe".to_string())
        });
        assert!(matches!(result, Err(BrandError::Config(_))));
    }
}
