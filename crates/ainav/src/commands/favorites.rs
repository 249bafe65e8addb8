use crate::commands::query::find_tool;
use crate::commands::{CmdMessage, CmdResult, DisplayTool};
use crate::error::{AinavError, Result};
use crate::model::Tool;
use crate::prefs::{favorite_tools, toggle_favorite, PrefsStore};
use tracing::info;

/// Flips the favorite flag of one tool and persists the change.
pub fn toggle<P: PrefsStore>(store: &mut P, tools: &[Tool], id: &str) -> Result<CmdResult> {
    let tool = find_tool(tools, id).ok_or_else(|| AinavError::ToolNotFound(id.to_string()))?;

    let prefs = toggle_favorite(&store.load()?, id);
    store.save(&prefs)?;

    let is_favorite = prefs.is_favorite(id);
    info!(tool = id, is_favorite, "toggled favorite");

    let verb = if is_favorite {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    let mut result = CmdResult::default().with_listed_tools(vec![DisplayTool {
        position: 1,
        is_favorite,
        tool: tool.clone(),
    }]);
    result.add_message(CmdMessage::success(format!("{}: {}", verb, tool.name)));
    Ok(result)
}

pub fn list<P: PrefsStore>(store: &P, tools: &[Tool]) -> Result<CmdResult> {
    let prefs = store.load()?;
    let listed: Vec<DisplayTool> = favorite_tools(tools, &prefs)
        .into_iter()
        .enumerate()
        .map(|(i, tool)| DisplayTool {
            position: i + 1,
            is_favorite: true,
            tool,
        })
        .collect();

    let mut result = CmdResult::default().with_listed_tools(listed);
    if result.listed_tools.is_empty() {
        result.add_message(CmdMessage::info("No favorites yet."));
    }
    Ok(result)
}
