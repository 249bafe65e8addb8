use super::{parse_catalog, CatalogSource, ARTICLES_FILE, CATEGORIES_FILE, TOOLS_FILE};
use crate::error::{AinavError, Result};
use crate::model::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads the catalog from `categories.json`, `tools.json` and `articles.json` in a
/// directory. All three files must exist.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|e| {
            AinavError::Store(format!("cannot read {}: {}", path.display(), e))
        })
    }
}

impl CatalogSource for JsonDirSource {
    fn load(&self) -> Result<Catalog> {
        debug!(dir = %self.dir.display(), "loading catalog from directory");
        let categories = self.read(CATEGORIES_FILE)?;
        let tools = self.read(TOOLS_FILE)?;
        let articles = self.read(ARTICLES_FILE)?;
        parse_catalog(&categories, &tools, &articles)
    }
}
