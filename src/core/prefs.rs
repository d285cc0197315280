//! # Preference Store / 偏好存储
//!
//! A small key-value store for user preferences. Edits are applied in memory
//! immediately and only reach disk on [`PreferenceStore::commit`].
//!
//! 用于用户偏好的小型键值存储。修改会立即在内存中生效，
//! 只有调用 [`PreferenceStore::commit`] 时才写入磁盘。

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::error::PrefsError;
use crate::infra::fs::write_atomic;

/// Key holding the persisted locale code.
pub const PREF_LANG: &str = "settings_language";

/// String key-value preferences.
pub trait PreferenceStore: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;

    fn put_string(&mut self, key: &str, value: &str);

    fn remove(&mut self, key: &str);

    /// Persists pending edits.
    fn commit(&mut self) -> Result<(), PrefsError>;
}

/// Preferences that live only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn commit(&mut self) -> Result<(), PrefsError> {
        Ok(())
    }
}

/// Preferences backed by a TOML file of string values.
///
/// ```toml
/// settings_language = "it_IT"
/// ```
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
    dirty: bool,
}

impl FilePreferences {
    /// Opens the preference file at `path`.
    ///
    /// A missing file yields an empty store. A file that is not UTF-8 TOML is
    /// logged and treated as empty; the next commit overwrites it. Values
    /// that are not strings are skipped.
    ///
    /// # Errors
    /// Returns [`PrefsError::Io`] when the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => parse_values(&path, bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "preference file not found, starting empty");
                BTreeMap::new()
            }
            Err(source) => return Err(PrefsError::Io { path, source }),
        };

        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }
}

fn parse_values(path: &Path, bytes: Vec<u8>) -> BTreeMap<String, String> {
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring preference file that is not UTF-8");
            return BTreeMap::new();
        }
    };

    let table = match toml::from_str::<toml::Table>(&content) {
        Ok(table) => table,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable preference file");
            return BTreeMap::new();
        }
    };

    table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(s) => Some((key, s)),
            other => {
                warn!(%key, kind = other.type_str(), "skipping non-string preference");
                None
            }
        })
        .collect()
}

impl PreferenceStore for FilePreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put_string(&mut self, key: &str, value: &str) {
        let previous = self.values.insert(key.to_string(), value.to_string());
        self.dirty |= previous.as_deref() != Some(value);
    }

    fn remove(&mut self, key: &str) {
        self.dirty |= self.values.remove(key).is_some();
    }

    fn commit(&mut self) -> Result<(), PrefsError> {
        if !self.dirty {
            return Ok(());
        }
        let content = toml::to_string(&self.values)?;
        write_atomic(&self.path, content.as_bytes())?;
        debug!(path = %self.path.display(), "preferences committed");
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_put_get_remove() {
        let mut prefs = MemoryPreferences::new();
        assert_eq!(prefs.get_string(PREF_LANG), None);
        prefs.put_string(PREF_LANG, "it_IT");
        assert_eq!(prefs.get_string(PREF_LANG).as_deref(), Some("it_IT"));
        prefs.remove(PREF_LANG);
        assert_eq!(prefs.get_string(PREF_LANG), None);
    }

    #[test]
    fn unchanged_file_store_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        let mut prefs = FilePreferences::open(&path).unwrap();
        prefs.commit().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn non_string_values_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "settings_language = \"fr_FR\"\nfont_size = 14\n").unwrap();

        let prefs = FilePreferences::open(&path).unwrap();
        assert_eq!(prefs.get_string(PREF_LANG).as_deref(), Some("fr_FR"));
        assert_eq!(prefs.get_string("font_size"), None);
    }
}
