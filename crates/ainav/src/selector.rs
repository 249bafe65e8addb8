//! # Selectors
//!
//! A [`Selector`] is the browsing criterion handed to the query engine. It is one of four
//! mutually exclusive modes:
//!
//! - [`Selector::All`]: no category filter (the `"全部"` sentinel)
//! - [`Selector::Category`]: a bare category id
//! - [`Selector::SubCategory`]: a category id plus one of its subcategory ids
//! - [`Selector::Search`]: free text, which overrides any category selection
//!
//! ## Legacy Encoding
//!
//! Older callers encode the subcategory mode as `"<category>-<subcategory>"`. Several real
//! subcategory ids contain hyphens themselves (`text-to-image`, `real-time`), so a blind
//! split at the first hyphen picks the wrong pair. [`Selector::parse_encoded`] is the only
//! routine that decodes these strings:
//!
//! 1. `search:<text>` decodes to a search.
//! 2. A string with no hyphen, or one equal to a known category id, is a bare category
//!    (`"全部"` decodes to `All`).
//! 3. If some known category `c` has a subcategory `s` with `c + "-" + s == encoded`, that
//!    pair wins.
//! 4. Otherwise the string is split at its first hyphen.
//!
//! Decoding never fails: an unresolvable pair simply selects nothing.

use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category id meaning "every tool, regardless of category".
pub const ALL_CATEGORY: &str = "全部";

const SEARCH_PREFIX: &str = "search:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selector {
    #[default]
    All,
    Category {
        id: String,
    },
    #[serde(rename = "subcategory")]
    SubCategory {
        category: String,
        sub: String,
    },
    Search {
        text: String,
    },
}

impl Selector {
    pub fn category(id: impl Into<String>) -> Self {
        let id = id.into();
        if id == ALL_CATEGORY {
            Selector::All
        } else {
            Selector::Category { id }
        }
    }

    pub fn subcategory(category: impl Into<String>, sub: impl Into<String>) -> Self {
        Selector::SubCategory {
            category: category.into(),
            sub: sub.into(),
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Selector::Search { text: text.into() }
    }

    /// Builds a selector from loose UI inputs.
    ///
    /// Precedence: a search string that is non-empty after trimming, then a subcategory
    /// (when one is given), then the bare category.
    pub fn resolve(category: &str, subcategory: Option<&str>, search: Option<&str>) -> Self {
        if let Some(text) = search.map(str::trim).filter(|t| !t.is_empty()) {
            return Selector::search(text);
        }

        match subcategory.filter(|s| !s.is_empty()) {
            Some(sub) => Selector::subcategory(category, sub),
            None => Selector::category(category),
        }
    }

    /// Decodes a legacy `"<category>-<subcategory>"` string. See the module docs for the
    /// resolution order.
    pub fn parse_encoded(encoded: &str, categories: &[Category]) -> Self {
        if let Some(text) = encoded.strip_prefix(SEARCH_PREFIX) {
            return Selector::search(text);
        }

        if !encoded.contains('-') || categories.iter().any(|c| c.id == encoded) {
            return Selector::category(encoded);
        }

        let known = categories.iter().find_map(|c| {
            let rest = encoded.strip_prefix(c.id.as_str())?.strip_prefix('-')?;
            c.find_subcategory(rest)
                .map(|s| Selector::subcategory(c.id.as_str(), s.id.as_str()))
        });
        if let Some(selector) = known {
            return selector;
        }

        match encoded.split_once('-') {
            Some((category, sub)) => Selector::subcategory(category, sub),
            None => Selector::category(encoded),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "{}", ALL_CATEGORY),
            Selector::Category { id } => write!(f, "{}", id),
            Selector::SubCategory { category, sub } => write!(f, "{}-{}", category, sub),
            Selector::Search { text } => write!(f, "{}{}", SEARCH_PREFIX, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubCategory;

    fn tree() -> Vec<Category> {
        vec![
            Category::new("image", "AI绘画", "🎨").with_subcategories(vec![
                SubCategory::new("text-to-image", "文本生图"),
                SubCategory::new("image-edit", "图像编辑"),
            ]),
            Category::new("common", "常用工具", "⚡")
                .with_subcategories(vec![SubCategory::new("chatbot", "对话助手")]),
        ]
    }

    #[test]
    fn resolve_prefers_search_over_everything() {
        let sel = Selector::resolve("common", Some("chatbot"), Some("  绘画 "));
        assert_eq!(sel, Selector::search("绘画"));
    }

    #[test]
    fn resolve_ignores_blank_search() {
        let sel = Selector::resolve("common", Some("chatbot"), Some("   "));
        assert_eq!(sel, Selector::subcategory("common", "chatbot"));
    }

    #[test]
    fn resolve_maps_sentinel_to_all() {
        assert_eq!(Selector::resolve(ALL_CATEGORY, None, None), Selector::All);
        assert_eq!(
            Selector::resolve("video", Some(""), None),
            Selector::category("video")
        );
    }

    #[test]
    fn parse_bare_category() {
        assert_eq!(
            Selector::parse_encoded("common", &tree()),
            Selector::category("common")
        );
        assert_eq!(Selector::parse_encoded("全部", &tree()), Selector::All);
    }

    #[test]
    fn parse_simple_pair() {
        assert_eq!(
            Selector::parse_encoded("common-chatbot", &tree()),
            Selector::subcategory("common", "chatbot")
        );
    }

    #[test]
    fn parse_hyphenated_subcategory_uses_known_tree() {
        assert_eq!(
            Selector::parse_encoded("image-text-to-image", &tree()),
            Selector::subcategory("image", "text-to-image")
        );
        assert_eq!(
            Selector::parse_encoded("image-image-edit", &tree()),
            Selector::subcategory("image", "image-edit")
        );
    }

    #[test]
    fn parse_unknown_pair_falls_back_to_first_hyphen() {
        assert_eq!(
            Selector::parse_encoded("xyz-a-b", &tree()),
            Selector::subcategory("xyz", "a-b")
        );
        assert_eq!(
            Selector::parse_encoded("common-", &tree()),
            Selector::subcategory("common", "")
        );
    }

    #[test]
    fn parse_known_hyphenated_category_stays_whole() {
        let tree = vec![Category::new("ai-tools", "AI工具", "🧰")
            .with_subcategories(vec![SubCategory::new("chat", "对话")])];
        assert_eq!(
            Selector::parse_encoded("ai-tools", &tree),
            Selector::category("ai-tools")
        );
        assert_eq!(
            Selector::parse_encoded("ai-tools-chat", &tree),
            Selector::subcategory("ai-tools", "chat")
        );
    }

    #[test]
    fn parse_search_prefix() {
        assert_eq!(
            Selector::parse_encoded("search:Chat-GPT", &tree()),
            Selector::search("Chat-GPT")
        );
    }

    #[test]
    fn display_matches_encoded_form() {
        let cases = [
            Selector::All,
            Selector::category("common"),
            Selector::subcategory("image", "text-to-image"),
            Selector::search("绘画"),
        ];
        for sel in cases {
            assert_eq!(Selector::parse_encoded(&sel.to_string(), &tree()), sel);
        }
    }
}
