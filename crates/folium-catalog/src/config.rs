//! Service configuration.
//!
//! Loaded from a TOML file with environment overrides applied on top. Every
//! field has a default, so the service runs out of the box with no file at
//! all: builtin collection, `127.0.0.1:4170`, the local dev frontend as the
//! one allowed origin.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Config file consulted when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "folium.toml";

/// Catalog service configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON file holding the served collection. When absent the compiled-in
    /// demo collection is served instead.
    pub projects_file: Option<PathBuf>,
    /// Listen address.
    #[serde(default)]
    pub server: ServerConfig,
    /// Cross-origin policy.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Static asset serving.
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// `[cors]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorsConfig {
    /// The single origin allowed to call the API. The browser frontend is
    /// the only intended consumer, so exactly one origin is configurable.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

/// `[assets]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Directory served under `/files` (resume download and images).
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4170
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            projects_file: None,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

impl CatalogConfig {
    /// Loads configuration.
    ///
    /// An explicit path must exist; with no explicit path, the default
    /// `folium.toml` is used when present and built-in defaults otherwise.
    /// Environment overrides (`FOLIUM_HOST`, `FOLIUM_PORT`,
    /// `FOLIUM_ALLOWED_ORIGIN`, `FOLIUM_ASSETS_DIR`, `FOLIUM_PROJECTS_FILE`)
    /// are applied on top of whatever was read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(Error::config(format!(
                        "configuration file not found: {}",
                        explicit.display()
                    )));
                }
                Self::from_file(explicit)?
            }
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_PATH);
                if fallback.exists() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Applies overrides from a name → value lookup; the lookup is the
    /// process environment in production and a plain map in tests.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("FOLIUM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FOLIUM_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| Error::config(format!("invalid FOLIUM_PORT: {e}")))?;
        }
        if let Some(origin) = lookup("FOLIUM_ALLOWED_ORIGIN") {
            self.cors.allowed_origin = origin;
        }
        if let Some(dir) = lookup("FOLIUM_ASSETS_DIR") {
            self.assets.dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("FOLIUM_PROJECTS_FILE") {
            self.projects_file = Some(PathBuf::from(file));
        }
        Ok(())
    }

    /// The `host:port` string the listener binds.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Renders the effective configuration as TOML (for `config show` and
    /// `config init`).
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("failed to serialize config: {e}")))
    }
}

// ============================================================================
// Tests
// ============================================================================
