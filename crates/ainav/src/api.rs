//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every ainav operation, whatever the UI.
//!
//! The facade:
//! - **Owns** the loaded catalog, the counted category tree, the preferences store and
//!   the configuration
//! - **Normalizes inputs**: raw category/subcategory/search arguments become a
//!   [`Selector`] through [`AinavApi::selector_for`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that lives in `commands/*.rs`) and no presentation.
//!
//! ## Generic Over PrefsStore
//!
//! `AinavApi<P: PrefsStore>` runs against `JsonPrefsStore` in production and
//! `InMemoryPrefsStore` in tests, so the facade is testable without a filesystem.
//!
//! ## Counts Are Computed Once
//!
//! The catalog is immutable, so [`with_counts`] runs a single time in the constructor and
//! every `categories()` call hands out the same counted tree.

use crate::commands::config::ConfigAction;
use crate::commands::counts::with_counts;
use crate::commands::list::ToolQuery;
use crate::commands::query::featured;
use crate::commands::{self, CmdResult, DisplayTool};
use crate::config::AinavConfig;
use crate::error::{AinavError, Result};
use crate::model::{Catalog, Category};
use crate::prefs::PrefsStore;
use crate::selector::{Selector, ALL_CATEGORY};
use crate::store::CatalogSource;
use tracing::debug;

/// Filters for the news listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub category: String,
    pub search: Option<String>,
    pub featured_only: bool,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            search: None,
            featured_only: false,
        }
    }
}

/// The main API facade for ainav operations.
pub struct AinavApi<P: PrefsStore> {
    catalog: Catalog,
    counted: Vec<Category>,
    prefs: P,
    config: AinavConfig,
}

impl<P: PrefsStore> AinavApi<P> {
    pub fn new(catalog: Catalog, prefs: P, config: AinavConfig) -> Self {
        let counted = with_counts(&catalog.categories, &catalog.tools);
        debug!(
            categories = counted.len(),
            tools = catalog.tools.len(),
            articles = catalog.articles.len(),
            "catalog ready"
        );
        Self {
            catalog,
            counted,
            prefs,
            config,
        }
    }

    pub fn from_source<S: CatalogSource>(
        source: &S,
        prefs: P,
        config: AinavConfig,
    ) -> Result<Self> {
        Ok(Self::new(source.load()?, prefs, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn prefs_store(&self) -> &P {
        &self.prefs
    }

    /// Builds a selector from raw arguments. With nothing given, the configured default
    /// category is used. A lone category argument goes through
    /// [`Selector::parse_encoded`], so legacy `"<cat>-<sub>"` strings work too.
    pub fn selector_for(
        &self,
        category: Option<&str>,
        subcategory: Option<&str>,
        search: Option<&str>,
    ) -> Selector {
        let category = category.unwrap_or(&self.config.default_category);
        if subcategory.is_none() && search.map_or(true, |s| s.trim().is_empty()) {
            return Selector::parse_encoded(category, &self.catalog.categories);
        }
        Selector::resolve(category, subcategory, search)
    }

    /// A query for `selector` using the configured page size.
    pub fn tool_query(&self, selector: Selector) -> ToolQuery {
        ToolQuery::new(selector).with_page_size(self.config.page_size)
    }

    pub fn list_tools(&mut self, request: ToolQuery) -> Result<CmdResult> {
        if let (true, Selector::Search { text }) = (request.record_history, &request.selector)
        {
            commands::history::record(&mut self.prefs, text, self.config.history_limit)?;
        }
        let prefs = self.prefs.load()?;
        Ok(commands::list::run(
            &self.catalog.tools,
            &self.counted,
            &request,
            &prefs,
        ))
    }

    /// The category tree with subcategory counts.
    pub fn categories(&self) -> Result<CmdResult> {
        Ok(CmdResult::default().with_categories(self.counted.clone()))
    }

    pub fn featured_tools(&self) -> Result<CmdResult> {
        let prefs = self.prefs.load()?;
        let listed = featured(&self.catalog.tools)
            .into_iter()
            .enumerate()
            .map(|(i, tool)| DisplayTool {
                position: i + 1,
                is_favorite: prefs.is_favorite(&tool.id),
                tool,
            })
            .collect();
        Ok(CmdResult::default().with_listed_tools(listed))
    }

    pub fn view_tool(&self, id: &str) -> Result<CmdResult> {
        let prefs = self.prefs.load()?;
        commands::view::run(&self.catalog.tools, id, &prefs)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<CmdResult> {
        commands::favorites::toggle(&mut self.prefs, &self.catalog.tools, id)
    }

    pub fn favorites(&self) -> Result<CmdResult> {
        commands::favorites::list(&self.prefs, &self.catalog.tools)
    }

    pub fn record_search(&mut self, text: &str) -> Result<CmdResult> {
        commands::history::record(&mut self.prefs, text, self.config.history_limit)
    }

    pub fn search_history(&self) -> Result<CmdResult> {
        commands::history::list(&self.prefs)
    }

    pub fn clear_search_history(&mut self) -> Result<CmdResult> {
        commands::history::clear(&mut self.prefs)
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        commands::theme::toggle(&mut self.prefs)
    }

    pub fn theme(&self) -> Result<CmdResult> {
        commands::theme::show(&self.prefs)
    }

    pub fn list_articles(&self, request: &ArticleQuery) -> Result<CmdResult> {
        Ok(commands::articles::list(
            &self.catalog.articles,
            &request.category,
            request.search.as_deref(),
            request.featured_only,
        ))
    }

    pub fn read_article(&self, id: &str) -> Result<CmdResult> {
        commands::articles::read(&self.catalog.articles, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config, action)
    }
}

/// Parses a 1-based page argument. Anything that is not a non-negative integer is
/// rejected rather than silently reset.
pub fn parse_page(raw: &str) -> Result<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        AinavError::InvalidArgument(format!("page must be a whole number, got '{}'", raw))
    })
}
