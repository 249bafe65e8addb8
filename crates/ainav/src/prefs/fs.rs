use super::{PrefsStore, UserPreferences};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PREFS_FILENAME: &str = "prefs.json";

/// Stores preferences as pretty-printed JSON in `<dir>/prefs.json`.
#[derive(Debug, Clone)]
pub struct JsonPrefsStore {
    path: PathBuf,
}

impl JsonPrefsStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(PREFS_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefsStore for JsonPrefsStore {
    fn load(&self) -> Result<UserPreferences> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no preferences stored yet");
            return Ok(UserPreferences::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let prefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    fn save(&mut self, prefs: &UserPreferences) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AinavError;
    use crate::prefs::{toggle_favorite, Theme};
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = tempdir().unwrap();
        let store = JsonPrefsStore::new(temp.path());
        assert_eq!(store.load().unwrap(), UserPreferences::default());
    }

    #[test]
    fn save_then_load() {
        let temp = tempdir().unwrap();
        let mut store = JsonPrefsStore::new(temp.path().join("nested"));

        let prefs = toggle_favorite(&UserPreferences::default(), "claude");
        let prefs = UserPreferences {
            theme: Theme::Dark,
            ..prefs
        };
        store.save(&prefs).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn corrupted_file_is_a_serialization_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(PREFS_FILENAME), "{ not json").unwrap();
        let store = JsonPrefsStore::new(temp.path());
        assert!(matches!(store.load(), Err(AinavError::Serialization(_))));
    }
}
