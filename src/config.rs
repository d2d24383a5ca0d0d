use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
    /// Per-connection read/write deadline in seconds.
    pub request_timeout_secs: u64,
}

/// Settings for the served site, cloned into every connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory all servable files must live under.
    pub doc_root: PathBuf,
    /// File served for the empty request path.
    pub index_file: String,
    /// Page served with 404 responses, relative to the document root.
    pub not_found_page: String,
    /// Identifying string for the Server header and the server template token.
    pub server_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            doc_root: PathBuf::from("www"),
            index_file: "index.html".to_string(),
            not_found_page: "404.html".to_string(),
            server_name: "tinyserve".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `TINYSERVE_CONFIG`,
    /// falling back to defaults. A `LISTEN` environment variable
    /// overrides the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("TINYSERVE_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}
