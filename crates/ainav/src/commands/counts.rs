use crate::model::{Category, Tool};
use std::collections::HashMap;

/// Returns a copy of the category tree with every subcategory `count` filled in.
///
/// One pass over the tools builds a `(category, subcategory)` histogram; a second pass
/// over the tree reads it back. Neither input is modified. Tools without a subcategory
/// never count toward any subcategory.
pub fn with_counts(categories: &[Category], tools: &[Tool]) -> Vec<Category> {
    let mut histogram: HashMap<(&str, &str), usize> = HashMap::new();
    for tool in tools {
        if let Some(sub) = tool.subcategory.as_deref() {
            *histogram.entry((tool.category.as_str(), sub)).or_default() += 1;
        }
    }

    categories
        .iter()
        .map(|category| {
            let mut counted = category.clone();
            if let Some(subs) = counted.sub_categories.as_mut() {
                for sub in subs.iter_mut() {
                    let n = histogram
                        .get(&(category.id.as_str(), sub.id.as_str()))
                        .copied()
                        .unwrap_or(0);
                    sub.count = Some(n);
                }
            }
            counted
        })
        .collect()
}

/// Sum of the subcategory counts of `category_id` in an already-counted tree.
pub fn category_total(counted: &[Category], category_id: &str) -> usize {
    counted
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.subcategories().iter().filter_map(|s| s.count).sum())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubCategory;
    use crate::test_utils::{sample_categories, sample_tools};

    fn counts_of(tree: &[Category], id: &str) -> Vec<Option<usize>> {
        tree.iter()
            .find(|c| c.id == id)
            .unwrap()
            .subcategories()
            .iter()
            .map(|s| s.count)
            .collect()
    }

    #[test]
    fn counts_each_subcategory() {
        let tree = with_counts(&sample_categories(), &sample_tools());
        assert_eq!(counts_of(&tree, "common"), vec![Some(3), Some(1), Some(1)]);
        assert_eq!(counts_of(&tree, "image"), vec![Some(2), Some(1), Some(0)]);
        assert_eq!(counts_of(&tree, "writing"), vec![Some(0), Some(1)]);
        assert_eq!(counts_of(&tree, "video"), vec![Some(0), Some(1)]);
    }

    #[test]
    fn nine_five_zero() {
        let categories = vec![Category::new("common", "常用工具", "⚡")
            .with_subcategories(vec![
                SubCategory::new("chatbot", "对话助手"),
                SubCategory::new("search", "AI搜索"),
                SubCategory::new("productivity", "效率工具"),
            ])];
        let mut tools = Vec::new();
        for i in 0..9 {
            tools.push(
                Tool::new(format!("bot{}", i), "Bot", "", "common").with_subcategory("chatbot"),
            );
        }
        for i in 0..5 {
            tools.push(
                Tool::new(format!("find{}", i), "Find", "", "common").with_subcategory("search"),
            );
        }

        let tree = with_counts(&categories, &tools);
        assert_eq!(counts_of(&tree, "common"), vec![Some(9), Some(5), Some(0)]);
        assert_eq!(tree[0].id, "common");
        assert_eq!(tree[0].name, "常用工具");
        assert_eq!(tree[0].subcategories()[0].name, "对话助手");
    }

    #[test]
    fn does_not_touch_inputs() {
        let categories = sample_categories();
        let tools = sample_tools();
        let _ = with_counts(&categories, &tools);
        assert!(categories
            .iter()
            .flat_map(|c| c.subcategories())
            .all(|s| s.count.is_none()));
        assert_eq!(tools, sample_tools());
    }

    #[test]
    fn categories_without_subcategories_are_unchanged() {
        let tree = with_counts(&sample_categories(), &sample_tools());
        let misc = tree.iter().find(|c| c.id == "misc").unwrap();
        assert_eq!(misc.sub_categories, None);
    }

    #[test]
    fn same_subcategory_id_under_two_categories_is_counted_separately() {
        let tree = with_counts(&sample_categories(), &sample_tools());
        assert_eq!(counts_of(&tree, "writing")[1], Some(1));
        assert_eq!(counts_of(&tree, "video")[1], Some(1));
    }

    #[test]
    fn mismatched_subcategory_is_ignored() {
        let tools = vec![Tool::new("odd", "Odd", "", "video").with_subcategory("chatbot")];
        let tree = with_counts(&sample_categories(), &tools);
        assert_eq!(counts_of(&tree, "common")[0], Some(0));
    }

    #[test]
    fn total_sums_subcategories() {
        let tree = with_counts(&sample_categories(), &sample_tools());
        assert_eq!(category_total(&tree, "common"), 5);
        assert_eq!(category_total(&tree, "misc"), 0);
        assert_eq!(category_total(&tree, "unknown"), 0);
    }
}
