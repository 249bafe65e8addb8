use crate::commands::query::find_tool;
use crate::commands::{CmdResult, DisplayTool};
use crate::error::{AinavError, Result};
use crate::model::Tool;
use crate::prefs::UserPreferences;

/// Looks up a single tool. Unlike browsing filters, an unknown id here is an error: the
/// caller asked for one specific record.
pub fn run(tools: &[Tool], id: &str, prefs: &UserPreferences) -> Result<CmdResult> {
    let tool = find_tool(tools, id).ok_or_else(|| AinavError::ToolNotFound(id.to_string()))?;
    let position = tools.iter().take_while(|t| t.id != id).count() + 1;

    Ok(CmdResult::default().with_listed_tools(vec![DisplayTool {
        position,
        is_favorite: prefs.is_favorite(id),
        tool: tool.clone(),
    }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_tools;

    #[test]
    fn returns_the_tool() {
        let result = run(&sample_tools(), "midjourney", &UserPreferences::default()).unwrap();
        assert_eq!(result.listed_tools.len(), 1);
        assert_eq!(result.listed_tools[0].tool.name, "Midjourney");
        assert_eq!(result.listed_tools[0].position, 3);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = run(&sample_tools(), "nope", &UserPreferences::default()).unwrap_err();
        assert!(matches!(err, AinavError::ToolNotFound(ref id) if id == "nope"));
    }
}
