use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prefs::{clear_search_history, record_search, PrefsStore};

/// Pushes a query onto the recent searches. A limit of 0 disables history.
pub fn record<P: PrefsStore>(store: &mut P, query: &str, limit: usize) -> Result<CmdResult> {
    let current = store.load()?;
    let next = record_search(&current, query, limit);
    if next != current {
        store.save(&next)?;
    }
    Ok(CmdResult::default().with_recent_searches(next.recent_searches))
}

pub fn list<P: PrefsStore>(store: &P) -> Result<CmdResult> {
    let prefs = store.load()?;
    let mut result = CmdResult::default().with_recent_searches(prefs.recent_searches);
    if result.recent_searches.is_empty() {
        result.add_message(CmdMessage::info("No recent searches."));
    }
    Ok(result)
}

pub fn clear<P: PrefsStore>(store: &mut P) -> Result<CmdResult> {
    let prefs = clear_search_history(&store.load()?);
    store.save(&prefs)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Search history cleared"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::memory::InMemoryPrefsStore;

    #[test]
    fn record_moves_repeat_to_front() {
        let mut store = InMemoryPrefsStore::new();
        record(&mut store, "绘画", 5).unwrap();
        record(&mut store, "写作", 5).unwrap();
        let result = record(&mut store, "绘画", 5).unwrap();
        assert_eq!(result.recent_searches, vec!["绘画", "写作"]);
    }

    #[test]
    fn record_respects_limit() {
        let mut store = InMemoryPrefsStore::new();
        for q in ["a", "b", "c", "d", "e", "f"] {
            record(&mut store, q, 5).unwrap();
        }
        let result = list(&store).unwrap();
        assert_eq!(result.recent_searches, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn blank_query_skips_the_save() {
        let mut store = InMemoryPrefsStore::new();
        record(&mut store, "   ", 5).unwrap();
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn clear_empties_history() {
        let mut store = InMemoryPrefsStore::new();
        record(&mut store, "claude", 5).unwrap();
        let result = clear(&mut store).unwrap();
        assert_eq!(result.messages.len(), 1);

        let result = list(&store).unwrap();
        assert!(result.recent_searches.is_empty());
        assert_eq!(result.messages[0].content, "No recent searches.");
    }
}
