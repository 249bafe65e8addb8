use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prefs::{toggle_theme, PrefsStore};

pub fn toggle<P: PrefsStore>(store: &mut P) -> Result<CmdResult> {
    let prefs = toggle_theme(&store.load()?);
    store.save(&prefs)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Theme set to {}", prefs.theme)));
    Ok(result)
}

pub fn show<P: PrefsStore>(store: &P) -> Result<CmdResult> {
    let prefs = store.load()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Theme: {}", prefs.theme)));
    Ok(result)
}
