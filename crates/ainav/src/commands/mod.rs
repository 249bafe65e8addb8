//! # Command Layer
//!
//! This module contains the **core business logic** of ainav. The pure query functions
//! (`query`, `with_counts`, `paginate`, `resolve_title`, article queries) live in their
//! own submodules; thin `run`-style entry points combine them into a [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the [`PrefsStore`](crate::prefs::PrefsStore) they are handed
//! - **Argument parsing**: that is the UI's job
//! - **Rendering**: results are data, the UI decides how they look
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries everything a UI needs to draw a screen: the listed tools (as
//! [`DisplayTool`], pairing a tool with its position in the full result and its favorite
//! flag), listed articles, the counted category tree, page metadata, the heading, recent
//! searches, configuration and messages.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use the sample
//! catalog from `test_utils` and `InMemoryPrefsStore`.
//!
//! ## Command Modules
//!
//! - [`query`]: Tool query engine (category, subcategory, search)
//! - [`counts`]: Subcategory count aggregation
//! - [`paginate`]: Page slicing and the page-number strip
//! - [`title`]: Listing headings
//! - [`list`]: Query + paginate + heading in one call
//! - [`view`]: Single tool lookup
//! - [`articles`]: News article queries and the reader
//! - [`favorites`]: Favorite toggling and listing
//! - [`history`]: Recent searches
//! - [`theme`]: Light/dark preference
//! - [`config`]: Configuration display

use crate::config::AinavConfig;
use crate::model::{Article, Category, Tool};
use serde::Serialize;

pub mod articles;
pub mod config;
pub mod counts;
pub mod favorites;
pub mod history;
pub mod list;
pub mod paginate;
pub mod query;
pub mod theme;
pub mod title;
pub mod view;

use paginate::{PageInfo, PageLink};
use title::Heading;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A tool as it appears in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTool {
    /// 1-based position in the full (unpaginated) result.
    pub position: usize,
    pub is_favorite: bool,
    pub tool: Tool,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_tools: Vec<DisplayTool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_articles: Vec<Article>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub article_categories: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub page_links: Vec<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recent_searches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<AinavConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tools(mut self, tools: Vec<DisplayTool>) -> Self {
        self.listed_tools = tools;
        self
    }

    pub fn with_listed_articles(mut self, articles: Vec<Article>) -> Self {
        self.listed_articles = articles;
        self
    }

    pub fn with_article_categories(mut self, categories: Vec<String>) -> Self {
        self.article_categories = categories;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page_links = paginate::page_links(page.current_page, page.total_pages);
        self.page = Some(page);
        self
    }

    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn with_recent_searches(mut self, searches: Vec<String>) -> Self {
        self.recent_searches = searches;
        self
    }

    pub fn with_config(mut self, config: AinavConfig) -> Self {
        self.config = Some(config);
        self
    }
}
