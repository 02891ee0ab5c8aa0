//! Vitrine configuration file handling
//!
//! `vitrine.toml` lives at the root of the consumer's crate and tells the CLI
//! where components go and how they should import each other:
//!
//! ```toml
//! [aliases]
//! components = "crate::components"
//! glass = "vitrine_glass"
//!
//! [paths]
//! components_dir = "src/components"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file
pub const CONFIG_FILE: &str = "vitrine.toml";

/// Project configuration stored in vitrine.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub aliases: AliasConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Module paths written into copied component sources
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AliasConfig {
    /// Module path the components are reachable under
    #[serde(default = "default_components_alias")]
    pub components: String,
    /// Path of the glass engine crate
    #[serde(default = "default_glass_alias")]
    pub glass: String,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            components: default_components_alias(),
            glass: default_glass_alias(),
        }
    }
}

fn default_components_alias() -> String {
    "crate::components".to_string()
}

fn default_glass_alias() -> String {
    "vitrine_glass".to_string()
}

/// Filesystem locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
        }
    }
}

fn default_components_dir() -> String {
    "src/components".to_string()
}

impl VitrineConfig {
    /// Load configuration from vitrine.toml in `path`
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `vitrine init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: VitrineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Override the components alias
    pub fn with_components_alias(mut self, alias: &str) -> Self {
        self.aliases.components = alias.trim_end_matches("::").to_string();
        self
    }

    /// Override the glass crate path
    pub fn with_glass_alias(mut self, alias: &str) -> Self {
        self.aliases.glass = alias.trim_end_matches("::").to_string();
        self
    }

    /// Override the components directory
    pub fn with_components_dir(mut self, dir: &str) -> Self {
        self.paths.components_dir = dir.to_string();
        self
    }

    /// Absolute components directory for a project rooted at `root`
    pub fn components_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.components_dir)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize vitrine config")
    }
}
