use super::{parse_catalog, CatalogSource};
use crate::error::Result;
use crate::model::Catalog;

const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const TOOLS_JSON: &str = include_str!("../../data/tools.json");
const ARTICLES_JSON: &str = include_str!("../../data/articles.json");

/// The catalog shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load(&self) -> Result<Catalog> {
        parse_catalog(CATEGORIES_JSON, TOOLS_JSON, ARTICLES_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::counts::with_counts;
    use crate::commands::query::{query, search};
    use crate::selector::Selector;

    #[test]
    fn builtin_catalog_loads_and_is_consistent() {
        let catalog = BuiltinSource.load().unwrap();
        assert_eq!(catalog.categories.len(), 14);
        assert_eq!(catalog.tools.len(), 112);
        assert_eq!(catalog.articles.len(), 6);
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn builtin_common_chatbot_subset() {
        let catalog = BuiltinSource.load().unwrap();
        let result = query(&catalog.tools, &Selector::subcategory("common", "chatbot"));
        assert_eq!(result.len(), 9);
        assert_eq!(result[0].id, "chatgpt");
        assert_eq!(result[0].name, "ChatGPT");
    }

    #[test]
    fn builtin_counts_match_queries() {
        let catalog = BuiltinSource.load().unwrap();
        let counted = with_counts(&catalog.categories, &catalog.tools);
        for category in &counted {
            for sub in category.subcategories() {
                let selected = query(
                    &catalog.tools,
                    &Selector::subcategory(category.id.as_str(), sub.id.as_str()),
                );
                assert_eq!(sub.count, Some(selected.len()), "{}-{}", category.id, sub.id);
            }
        }
        let common = counted.iter().find(|c| c.id == "common").unwrap();
        let counts: Vec<_> = common.subcategories().iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![Some(9), Some(5), Some(4)]);
    }

    #[test]
    fn builtin_search_for_painting() {
        let catalog = BuiltinSource.load().unwrap();
        let result = search(&catalog.tools, "绘画");
        assert!(result.iter().any(|t| t.id == "midjourney"));
        assert!(result
            .iter()
            .all(|t| t.name.contains("绘画") || t.description.contains("绘画")));
    }

    #[test]
    fn builtin_sentinel_returns_everything() {
        let catalog = BuiltinSource.load().unwrap();
        assert_eq!(query(&catalog.tools, &Selector::All), catalog.tools);
    }
}
