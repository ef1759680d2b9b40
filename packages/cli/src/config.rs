use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for `*.page.json` scripts
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Where generated `.jsx` files are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Catalog file, relative to the project root
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Emit category-specific tags instead of `div`
    #[serde(default)]
    pub semantic: bool,
}

fn default_src_dir() -> String {
    "pages".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_catalog() -> String {
    "catalog.json".to_string()
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", config_path.display()))?;
            Ok(config)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn get_src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn get_catalog_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.catalog)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            catalog: default_catalog(),
            semantic: false,
        }
    }
}
