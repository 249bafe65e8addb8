//! # Catalog Sources
//!
//! The catalog is static: it is loaded once at startup and never written back. A
//! [`CatalogSource`] is whatever produces that one-time snapshot.
//!
//! ## Implementations
//!
//! - [`builtin::BuiltinSource`]: the default catalog compiled into the binary
//! - [`fs::JsonDirSource`]: a directory holding replacement JSON files
//! - [`memory::InMemorySource`]: wraps an existing [`Catalog`], for tests
//!
//! ## File Layout
//!
//! Both the builtin data and `JsonDirSource` use the same three documents:
//!
//! ```text
//! <dir>/
//! ├── categories.json     # Category tree (counts are derived, never stored)
//! ├── tools.json          # Tool records, in display order
//! └── articles.json       # News articles
//! ```

use crate::error::Result;
use crate::model::{Article, Catalog, Category, Tool};
use tracing::warn;

pub mod builtin;
pub mod fs;
pub mod memory;

pub const CATEGORIES_FILE: &str = "categories.json";
pub const TOOLS_FILE: &str = "tools.json";
pub const ARTICLES_FILE: &str = "articles.json";

/// Produces the immutable catalog snapshot.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;
}

/// Parses the three catalog documents and logs any dangling references.
pub(crate) fn parse_catalog(categories: &str, tools: &str, articles: &str) -> Result<Catalog> {
    let categories: Vec<Category> = serde_json::from_str(categories)?;
    let tools: Vec<Tool> = serde_json::from_str(tools)?;
    let articles: Vec<Article> = serde_json::from_str(articles)?;

    let catalog = Catalog::new(categories, tools, articles);
    for finding in catalog.validate() {
        warn!("catalog: {}", finding);
    }
    Ok(catalog)
}
