//! # User Preferences
//!
//! Favorites, recent searches and the theme are per-user state. They live in a plain
//! [`UserPreferences`] value: every transition takes the current value and returns the
//! next one, so the business logic never touches storage.
//!
//! Persistence is the job of a [`PrefsStore`] adapter:
//!
//! - [`fs::JsonPrefsStore`]: `prefs.json` in the ainav home directory
//! - [`memory::InMemoryPrefsStore`]: for tests and embedding
//!
//! The API layer loads, applies a transition, and saves. Nothing else writes.

use crate::error::Result;
use crate::model::Tool;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Default number of recent searches kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Favorite tool ids, in the order they were added.
    #[serde(default)]
    pub favorites: Vec<String>,
    /// Most recent first.
    #[serde(default)]
    pub recent_searches: Vec<String>,
    #[serde(default)]
    pub theme: Theme,
}

impl UserPreferences {
    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.favorites.iter().any(|id| id == tool_id)
    }
}

/// Removes `tool_id` from the favorites if present, appends it otherwise.
pub fn toggle_favorite(prefs: &UserPreferences, tool_id: &str) -> UserPreferences {
    let mut next = prefs.clone();
    if next.is_favorite(tool_id) {
        next.favorites.retain(|id| id != tool_id);
    } else {
        next.favorites.push(tool_id.to_string());
    }
    next
}

/// Moves `query` to the front of the recent searches, keeping at most `limit` entries.
/// Blank queries leave the history untouched.
pub fn record_search(prefs: &UserPreferences, query: &str, limit: usize) -> UserPreferences {
    let query = query.trim();
    if query.is_empty() {
        return prefs.clone();
    }

    let mut next = prefs.clone();
    next.recent_searches.retain(|s| s != query);
    next.recent_searches.insert(0, query.to_string());
    next.recent_searches.truncate(limit);
    next
}

pub fn clear_search_history(prefs: &UserPreferences) -> UserPreferences {
    UserPreferences {
        recent_searches: Vec::new(),
        ..prefs.clone()
    }
}

pub fn with_theme(prefs: &UserPreferences, theme: Theme) -> UserPreferences {
    UserPreferences {
        theme,
        ..prefs.clone()
    }
}

pub fn toggle_theme(prefs: &UserPreferences) -> UserPreferences {
    with_theme(prefs, prefs.theme.toggled())
}

/// Favorite tools in store order. Favorites whose tool no longer exists are skipped.
pub fn favorite_tools(tools: &[Tool], prefs: &UserPreferences) -> Vec<Tool> {
    tools
        .iter()
        .filter(|t| prefs.is_favorite(&t.id))
        .cloned()
        .collect()
}

/// Persistence adapter for [`UserPreferences`].
pub trait PrefsStore {
    /// Loads the stored preferences, or defaults when nothing was stored yet.
    fn load(&self) -> Result<UserPreferences>;

    fn save(&mut self, prefs: &UserPreferences) -> Result<()>;
}
