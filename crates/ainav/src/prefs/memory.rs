use super::{PrefsStore, UserPreferences};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPrefsStore {
    prefs: UserPreferences,
    saves: usize,
}

impl InMemoryPrefsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl PrefsStore for InMemoryPrefsStore {
    fn load(&self) -> Result<UserPreferences> {
        Ok(self.prefs.clone())
    }

    fn save(&mut self, prefs: &UserPreferences) -> Result<()> {
        self.prefs = prefs.clone();
        self.saves += 1;
        Ok(())
    }
}
