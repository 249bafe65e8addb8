//! # Configuration
//!
//! Ainav configuration is managed by [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `AINAV_PAGE_SIZE`, `AINAV_HISTORY_LIMIT`, ...
//! 2. **Config file**: `<home>/ainav.toml`
//! 3. **Compiled defaults**: via `#[config(default = ...)]`
//!
//! `<home>` is `$AINAV_HOME` when set, otherwise the OS data directory (via the
//! `directories` crate). Preferences (`prefs.json`) live there too.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `12` | Tools per page; `0` disables paging |
//! | `history_limit` | `5` | Recent searches kept |
//! | `default_category` | `common` | Category shown when none is selected |
//! | `catalog_dir` | unset | Directory with replacement catalog JSON files |

use crate::error::{AinavError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "ainav.toml";
pub const HOME_ENV: &str = "AINAV_HOME";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AinavConfig {
    /// Number of tools per page. 0 shows the whole listing on one page.
    #[config(default = 12, env = "AINAV_PAGE_SIZE")]
    pub page_size: usize,

    /// How many recent searches to remember.
    #[config(default = 5, env = "AINAV_HISTORY_LIMIT")]
    pub history_limit: usize,

    /// Category listed when no category, subcategory or search is given.
    #[config(default = "common", env = "AINAV_DEFAULT_CATEGORY")]
    pub default_category: String,

    /// Load the catalog from this directory instead of the builtin data.
    #[config(env = "AINAV_CATALOG_DIR")]
    pub catalog_dir: Option<PathBuf>,
}

impl Default for AinavConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            history_limit: crate::prefs::DEFAULT_HISTORY_LIMIT,
            default_category: "common".to_string(),
            catalog_dir: None,
        }
    }
}

impl AinavConfig {
    /// Loads env overrides on top of `<home>/ainav.toml` on top of defaults. A missing
    /// file is not an error.
    pub fn load<P: AsRef<Path>>(home: P) -> Result<Self> {
        let config = AinavConfig::builder()
            .env()
            .file(home.as_ref().join(CONFIG_FILENAME))
            .load()?;
        Ok(config)
    }

    /// Value of a setting by its CLI name (`page-size` or `page_size`).
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "page_size" => Some(self.page_size.to_string()),
            "history_limit" => Some(self.history_limit.to_string()),
            "default_category" => Some(self.default_category.clone()),
            "catalog_dir" => Some(
                self.catalog_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// A commented `ainav.toml` listing every setting and its default.
    pub fn template() -> String {
        confique::toml::template::<AinavConfig>(confique::toml::FormatOptions::default())
    }
}

/// The ainav home directory: `$AINAV_HOME`, else the OS data directory.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    ProjectDirs::from("com", "ainav", "ainav")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AinavError::Config("could not determine a home directory".to_string()))
}
