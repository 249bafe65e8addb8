use crate::commands::paginate::paginate;
use crate::commands::query::query;
use crate::commands::title::resolve_title;
use crate::commands::{CmdMessage, CmdResult, DisplayTool};
use crate::model::{Category, Tool};
use crate::prefs::UserPreferences;
use crate::selector::Selector;

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolQuery {
    pub selector: Selector,
    pub page: usize,
    pub page_size: usize,
    /// Push a search selector onto the recent searches.
    pub record_history: bool,
}

impl ToolQuery {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            record_history: false,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn recording_history(mut self) -> Self {
        self.record_history = true;
        self
    }
}

/// Runs a full listing: query, heading, then the requested page.
pub fn run(
    tools: &[Tool],
    categories: &[Category],
    request: &ToolQuery,
    prefs: &UserPreferences,
) -> CmdResult {
    let matches = query(tools, &request.selector);
    let heading = resolve_title(categories, &request.selector, matches.len());

    let displayed: Vec<DisplayTool> = matches
        .into_iter()
        .enumerate()
        .map(|(i, tool)| DisplayTool {
            position: i + 1,
            is_favorite: prefs.is_favorite(&tool.id),
            tool,
        })
        .collect();

    let page = paginate(&displayed, request.page, request.page_size);

    let mut result = CmdResult::default()
        .with_heading(heading)
        .with_page(page.info)
        .with_listed_tools(page.items);

    if result.listed_tools.is_empty() && page.info.total_pages > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the last page ({})",
            page.info.current_page, page.info.total_pages
        )));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::paginate::PageLink;
    use crate::prefs::toggle_favorite;
    use crate::test_utils::{sample_categories, sample_tools};

    fn listed_ids(result: &CmdResult) -> Vec<&str> {
        result
            .listed_tools
            .iter()
            .map(|dt| dt.tool.id.as_str())
            .collect()
    }

    #[test]
    fn lists_first_page_with_heading() {
        let request = ToolQuery::new(Selector::category("common")).with_page_size(2);
        let result = run(
            &sample_tools(),
            &sample_categories(),
            &request,
            &UserPreferences::default(),
        );

        assert_eq!(listed_ids(&result), vec!["chatgpt", "claude"]);
        let page = result.page.unwrap();
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(result.heading.unwrap().title, "常用工具");
        assert_eq!(
            result.page_links,
            vec![PageLink::Number(1), PageLink::Number(2), PageLink::Number(3)]
        );
    }

    #[test]
    fn positions_continue_across_pages() {
        let request = ToolQuery::new(Selector::category("common"))
            .with_page(3)
            .with_page_size(2);
        let result = run(
            &sample_tools(),
            &sample_categories(),
            &request,
            &UserPreferences::default(),
        );

        assert_eq!(listed_ids(&result), vec!["notion-ai"]);
        assert_eq!(result.listed_tools[0].position, 5);
    }

    #[test]
    fn marks_favorites() {
        let prefs = toggle_favorite(&UserPreferences::default(), "claude");
        let request = ToolQuery::new(Selector::subcategory("common", "chatbot"));
        let result = run(&sample_tools(), &sample_categories(), &request, &prefs);

        let flags: Vec<bool> = result.listed_tools.iter().map(|d| d.is_favorite).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn search_heading_counts_all_matches_not_just_the_page() {
        let request = ToolQuery::new(Selector::search("openai")).with_page_size(1);
        let result = run(
            &sample_tools(),
            &sample_categories(),
            &request,
            &UserPreferences::default(),
        );

        assert_eq!(result.listed_tools.len(), 1);
        assert_eq!(result.heading.unwrap().subtitle, "为您找到 2 个相关AI工具");
    }

    #[test]
    fn past_the_end_warns_but_succeeds() {
        let request = ToolQuery::new(Selector::category("video")).with_page(4);
        let result = run(
            &sample_tools(),
            &sample_categories(),
            &request,
            &UserPreferences::default(),
        );

        assert!(result.listed_tools.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("past the last page"));
    }

    #[test]
    fn unknown_category_is_quietly_empty() {
        let request = ToolQuery::new(Selector::category("xyz"));
        let result = run(
            &sample_tools(),
            &sample_categories(),
            &request,
            &UserPreferences::default(),
        );

        assert!(result.listed_tools.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(result.page.unwrap().total_pages, 0);
    }
}
