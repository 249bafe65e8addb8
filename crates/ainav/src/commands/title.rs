use crate::model::Category;
use crate::selector::Selector;
use serde::Serialize;

/// Heading shown above a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

impl Heading {
    fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    fn all_tools() -> Self {
        Heading::new("全部工具", "探索所有优质AI工具")
    }
}

/// Resolves the listing heading for `selector`.
///
/// `match_count` is only used by search headings. Unknown ids never fail: an unknown
/// category falls back to the "all tools" heading and an unknown subcategory to a
/// generic one.
pub fn resolve_title(categories: &[Category], selector: &Selector, match_count: usize) -> Heading {
    match selector {
        Selector::Search { text } => Heading::new(
            format!("搜索结果: \"{}\"", text),
            format!("为您找到 {} 个相关AI工具", match_count),
        ),
        Selector::All => Heading::all_tools(),
        Selector::Category { id } => match categories.iter().find(|c| c.id == *id) {
            Some(category) => Heading::new(
                category.name.clone(),
                format!("探索 {} 分类下的优质AI工具", category.name),
            ),
            None => Heading::all_tools(),
        },
        Selector::SubCategory { category, sub } => {
            let category = categories.iter().find(|c| c.id == *category);
            let category_name = category.map(|c| c.name.as_str()).unwrap_or_default();
            let sub_name = category
                .and_then(|c| c.find_subcategory(sub))
                .map(|s| s.name.as_str());

            Heading::new(
                sub_name.unwrap_or("工具分类"),
                format!(
                    "{} > {} 分类下的AI工具",
                    category_name,
                    sub_name.unwrap_or_default()
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_categories;

    #[test]
    fn search_heading_reports_count() {
        let h = resolve_title(&sample_categories(), &Selector::search("绘画"), 3);
        assert_eq!(h.title, "搜索结果: \"绘画\"");
        assert_eq!(h.subtitle, "为您找到 3 个相关AI工具");
    }

    #[test]
    fn all_heading() {
        let h = resolve_title(&sample_categories(), &Selector::All, 10);
        assert_eq!(h, Heading::new("全部工具", "探索所有优质AI工具"));
    }

    #[test]
    fn category_heading_uses_name() {
        let h = resolve_title(&sample_categories(), &Selector::category("image"), 0);
        assert_eq!(h.title, "AI绘画");
        assert_eq!(h.subtitle, "探索 AI绘画 分类下的优质AI工具");
    }

    #[test]
    fn unknown_category_falls_back_to_all() {
        let h = resolve_title(&sample_categories(), &Selector::category("xyz"), 0);
        assert_eq!(h, Heading::all_tools());
    }

    #[test]
    fn subcategory_heading_with_hyphenated_id() {
        let sel = Selector::parse_encoded("image-text-to-image", &sample_categories());
        let h = resolve_title(&sample_categories(), &sel, 2);
        assert_eq!(h.title, "文本生图");
        assert_eq!(h.subtitle, "AI绘画 > 文本生图 分类下的AI工具");
    }

    #[test]
    fn unknown_subcategory_gets_generic_title() {
        let h = resolve_title(
            &sample_categories(),
            &Selector::subcategory("common", "nope"),
            0,
        );
        assert_eq!(h.title, "工具分类");
        assert_eq!(h.subtitle, "常用工具 >  分类下的AI工具");
    }
}
