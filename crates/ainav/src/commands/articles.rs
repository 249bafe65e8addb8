use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AinavError, Result};
use crate::model::Article;
use crate::selector::ALL_CATEGORY;
use tracing::debug;

/// The news listing: filter tabs plus the matching articles, optionally narrowed to the
/// featured ones.
pub fn list(
    articles: &[Article],
    category: &str,
    search: Option<&str>,
    featured_only: bool,
) -> CmdResult {
    let mut listed = query_articles(articles, category, search);
    if featured_only {
        listed = featured_articles(&listed);
    }
    let mut result = CmdResult::default()
        .with_article_categories(article_categories(articles))
        .with_listed_articles(listed);
    if result.listed_articles.is_empty() {
        result.add_message(CmdMessage::info("No articles match."));
    }
    result
}

pub fn read(articles: &[Article], id: &str) -> Result<CmdResult> {
    let article = find_article(articles, id)
        .cloned()
        .ok_or_else(|| AinavError::ArticleNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_articles(vec![article]))
}

/// Filter tabs for the news page: the `"全部"` sentinel followed by every distinct
/// article category in first-seen order.
pub fn article_categories(articles: &[Article]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for article in articles {
        if !categories.contains(&article.category) {
            categories.push(article.category.clone());
        }
    }
    categories
}

/// Filters articles by category or, when given, by search text.
///
/// As with tools, a search that is non-empty after trimming replaces the category
/// filter. It matches title, excerpt or any tag by case-insensitive substring.
pub fn query_articles(articles: &[Article], category: &str, search: Option<&str>) -> Vec<Article> {
    if let Some(text) = search.map(str::trim).filter(|t| !t.is_empty()) {
        return search_articles(articles, text);
    }

    if category == ALL_CATEGORY {
        return articles.to_vec();
    }

    articles
        .iter()
        .filter(|a| a.category == category)
        .cloned()
        .collect()
}

pub fn search_articles(articles: &[Article], text: &str) -> Vec<Article> {
    let term = text.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let results: Vec<Article> = articles
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&term)
                || a.excerpt.to_lowercase().contains(&term)
                || a.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
        })
        .cloned()
        .collect();

    debug!(term = %term, matches = results.len(), "searched articles");
    results
}

pub fn featured_articles(articles: &[Article]) -> Vec<Article> {
    articles.iter().filter(|a| a.featured).cloned().collect()
}

pub fn find_article<'a>(articles: &'a [Article], id: &str) -> Option<&'a Article> {
    articles.iter().find(|a| a.id == id)
}
