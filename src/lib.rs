//! # Locale Helper Library / Locale Helper 库
//!
//! This library keeps a note-taking app's language preference: it persists a
//! locale code, switches the active display locale, and resolves string
//! resources under any locale without disturbing the active one.
//!
//! 此库管理笔记应用的语言偏好：持久化区域代码、切换当前显示区域，
//! 并在不影响当前区域的情况下以任意区域解析字符串资源。
//!
//! ## Modules / 模块
//!
//! - `core` - Locale model, string resources, preferences and the language manager
//! - `infra` - File system, system locale detection and logging
//! - `reporting` - Console output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 区域模型、字符串资源、偏好和语言管理器
//! - `infra` - 文件系统、系统区域检测和日志
//! - `reporting` - 控制台输出
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```
//! use locale_helper::core::language;
//! use locale_helper::core::prefs::MemoryPreferences;
//! use locale_helper::infra::system::FixedLocale;
//! use locale_helper::{AppContext, StringRes};
//!
//! let ctx = AppContext::attach(MemoryPreferences::new(), FixedLocale::new("en_US"));
//! language::update_language(&ctx, Some("it_IT"));
//! assert_eq!(language::get_current_locale(&ctx).to_string(), "it_IT");
//! assert_eq!(language::get_localized_string(&ctx, "fr_FR", StringRes::AddNote), "Ajouter une note");
//! language::reset_system_language(&ctx);
//! assert_eq!(language::get_current_locale(&ctx).to_string(), "en_US");
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::context::AppContext;
pub use core::language;
pub use core::locale::Locale;
pub use core::resources::StringRes;

/// Picks the language for the helper's own messages.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "it" from "it_IT"), and finally falls back to the
/// default language ("en").
pub fn ui_locale(requested: &str) -> String {
    let requested = requested.trim().replace('_', "-");
    let available_locales = rust_i18n::available_locales!();

    if let Some(exact) = available_locales
        .iter()
        .find(|l| l.eq_ignore_ascii_case(&requested))
    {
        return exact.to_string();
    }

    requested
        .split('-')
        .next()
        .and_then(|lang_code| {
            available_locales.iter().find(|l| {
                l.split('-')
                    .next()
                    .is_some_and(|base| base.eq_ignore_ascii_case(lang_code))
            })
        })
        .map(|l| l.to_string())
        .unwrap_or_else(|| "en".to_string())
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
