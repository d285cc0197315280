//! # Runtime Settings / 运行时设置
//!
//! Where preferences live and which system locale to assume, resolved from
//! command line flags and environment variables.
//!
//! 偏好文件的位置以及采用的系统区域，由命令行参数和环境变量解析得出。

use std::path::PathBuf;

use anyhow::Result;

use crate::infra::fs::{default_prefs_path, expand_path};
use crate::infra::system::{FixedLocale, SysLocale, SystemLocale};

/// Environment variable naming the preference file.
pub const PREFS_ENV: &str = "LOCALE_HELPER_PREFS";

/// Environment variable pinning the system locale.
pub const SYSTEM_LOCALE_ENV: &str = "LOCALE_HELPER_SYSTEM_LOCALE";

/// Runtime settings for one invocation of the locale helper.
/// Resolved from command line flags, which in turn fall back to the
/// environment variables above.
///
/// 一次运行 locale helper 的设置。从命令行参数解析，命令行参数又回退到上面的环境变量。
#[derive(Debug, Clone)]
pub struct Settings {
    /// Location of the preference file.
    /// 偏好文件的位置。
    pub prefs_path: PathBuf,

    /// Overrides the detected operating system locale when set.
    /// 设置后覆盖检测到的操作系统区域。
    pub system_locale: Option<String>,

    /// Language of the helper's own messages (e.g. "en", "zh-CN").
    /// When absent the application's active locale is used.
    ///
    /// 助手自身消息的语言（例如 "en", "zh-CN"）。未设置时使用应用的当前区域。
    pub ui_language: Option<String>,

    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefs_path: default_prefs_path(),
            system_locale: None,
            ui_language: None,
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Builds settings from raw flag values, applying defaults and expanding
    /// `~` / `$VAR` in the preference path.
    pub fn resolve(
        prefs: Option<&str>,
        system_locale: Option<&str>,
        ui_language: Option<&str>,
        verbosity: u8,
    ) -> Result<Self> {
        let prefs_path = match prefs.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => expand_path(raw)?,
            None => default_prefs_path(),
        };

        Ok(Self {
            prefs_path,
            system_locale: non_empty(system_locale),
            ui_language: non_empty(ui_language),
            verbosity,
        })
    }

    /// The system locale provider these settings call for.
    pub fn system_locale_provider(&self) -> Box<dyn SystemLocale> {
        match &self.system_locale {
            Some(code) => Box::new(FixedLocale::new(code.clone())),
            None => Box::new(SysLocale),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_default_path_when_unset() {
        let settings = Settings::resolve(None, None, None, 0).unwrap();
        assert_eq!(settings.prefs_path, default_prefs_path());
        assert!(settings.system_locale.is_none());
    }

    #[test]
    fn resolve_trims_and_drops_empty_values() {
        let settings = Settings::resolve(Some("  "), Some(""), Some(" it "), 2).unwrap();
        assert_eq!(settings.prefs_path, default_prefs_path());
        assert!(settings.system_locale.is_none());
        assert_eq!(settings.ui_language.as_deref(), Some("it"));
        assert_eq!(settings.verbosity, 2);
    }

    #[test]
    fn fixed_system_locale_is_used() {
        let settings = Settings::resolve(Some("p.toml"), Some("fr_FR"), None, 0).unwrap();
        let provider = settings.system_locale_provider();
        assert_eq!(provider.system_locale().as_deref(), Some("fr_FR"));
        assert_eq!(settings.prefs_path, PathBuf::from("p.toml"));
    }
}
