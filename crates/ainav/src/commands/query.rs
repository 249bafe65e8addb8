//! The tool query engine.
//!
//! Every function here is a filter over the store slice: results are a subsequence of the
//! input in original order, and the input is never touched.

use crate::model::Tool;
use crate::selector::{Selector, ALL_CATEGORY};
use tracing::debug;

/// Returns the tools selected by `selector`, in store order.
///
/// Unknown category or subcategory ids are not errors; they select nothing. A
/// `Category` carrying the `"全部"` id selects everything, however it was built.
pub fn query(tools: &[Tool], selector: &Selector) -> Vec<Tool> {
    let results: Vec<Tool> = match selector {
        Selector::All => tools.to_vec(),
        Selector::Category { id } if id == ALL_CATEGORY => tools.to_vec(),
        Selector::Search { text } => return search(tools, text),
        Selector::Category { id } => tools
            .iter()
            .filter(|t| t.category == *id)
            .cloned()
            .collect(),
        Selector::SubCategory { category, sub } => tools
            .iter()
            .filter(|t| {
                t.category == *category && t.subcategory.as_deref() == Some(sub.as_str())
            })
            .cloned()
            .collect(),
    };

    debug!(selector = %selector, matches = results.len(), "queried tools");
    results
}

/// Loose-argument form of [`query`], for callers holding UI state rather than a
/// [`Selector`].
pub fn query_tools(
    tools: &[Tool],
    category: &str,
    subcategory: Option<&str>,
    search_text: Option<&str>,
) -> Vec<Tool> {
    query(tools, &Selector::resolve(category, subcategory, search_text))
}

/// Case-insensitive substring match against name or description.
///
/// A blank query (after trimming) matches nothing; callers that want "everything" ask
/// for [`Selector::All`].
pub fn search(tools: &[Tool], text: &str) -> Vec<Tool> {
    let term = text.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let results: Vec<Tool> = tools
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&term) || t.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    debug!(term = %term, matches = results.len(), "searched tools");
    results
}

/// Tools flagged `featured`. The flag has no effect on ordering elsewhere.
pub fn featured(tools: &[Tool]) -> Vec<Tool> {
    tools.iter().filter(|t| t.featured).cloned().collect()
}

pub fn find_tool<'a>(tools: &'a [Tool], id: &str) -> Option<&'a Tool> {
    tools.iter().find(|t| t.id == id)
}
