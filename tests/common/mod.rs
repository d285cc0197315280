// Shared test helpers for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use locale_helper::core::prefs::{FilePreferences, MemoryPreferences};
use locale_helper::infra::system::FixedLocale;
use locale_helper::{AppContext, Locale};
use tempfile::TempDir;

/// System locale every test context starts from.
pub const PRESET_LOCALE: &str = "en_US";

pub fn preset_locale() -> Locale {
    Locale::parse(PRESET_LOCALE).expect("preset locale parses")
}

/// A context with in-memory preferences and the preset system locale.
pub fn memory_context() -> AppContext {
    AppContext::attach(MemoryPreferences::new(), FixedLocale::new(PRESET_LOCALE))
}

/// A context whose preferences live in `path`.
pub fn file_context(path: &Path) -> AppContext {
    let prefs = FilePreferences::open(path).expect("Failed to open preference file");
    AppContext::attach(prefs, FixedLocale::new(PRESET_LOCALE))
}

/// Path of a preference file inside `dir` that does not exist yet.
pub fn prefs_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config").join("preferences.toml")
}
