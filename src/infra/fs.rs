//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as locating the preference file and replacing it atomically.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如定位偏好文件以及原子地替换文件。

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::core::error::PrefsError;

/// Directory created under the platform config dir.
pub const APP_DIR: &str = "locale-helper";

/// File name of the preference store.
pub const PREFS_FILE: &str = "preferences.toml";

/// Default location of the preference file, e.g.
/// `~/.config/locale-helper/preferences.toml` on Linux.
///
/// Falls back to the current directory when the platform has no config dir.
pub fn default_prefs_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_default()
        .join(PREFS_FILE)
}

/// Expands `~` and environment variables in a user supplied path.
///
/// # Arguments
/// * `raw` - Path as typed by the user
///
/// # Returns
/// The expanded path, or an error naming the unknown variable
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded =
        shellexpand::full(raw).with_context(|| format!("Failed to expand path: {raw}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Replaces `path` with `contents` without ever leaving a half-written file.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over the target. Parent directories are created as needed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), PrefsError> {
    let io_err = |source| PrefsError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_creates_parents_and_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join(PREFS_FILE);

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn default_path_ends_with_prefs_file() {
        let path = default_prefs_path();
        assert!(path.ends_with(Path::new(APP_DIR).join(PREFS_FILE)) || path.ends_with(PREFS_FILE));
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("some/dir/prefs.toml").unwrap(), PathBuf::from("some/dir/prefs.toml"));
    }
}
