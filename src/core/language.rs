//! # Language Helper / 语言助手
//!
//! The locale preference manager. It persists the user's language choice,
//! switches the active display locale and resolves string resources under an
//! arbitrary locale.
//!
//! 区域偏好管理器。它持久化用户的语言选择，切换当前显示区域，
//! 并在任意区域下解析字符串资源。
//!
//! None of these operations fail. A missing preference simply means "use the
//! system default"; persistence faults are logged and reported by
//! [`AppContext::commit`].

use serde::Serialize;
use tracing::debug;

use crate::core::context::AppContext;
use crate::core::locale::Locale;
use crate::core::prefs::PREF_LANG;
use crate::core::resources::{self, StringRes};

/// A language the string catalogs ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Catalog tag, e.g. `pt_BR`.
    pub tag: String,
    /// Name of the language in that language.
    pub name: String,
    /// Whether this is the catalog the active locale resolves to first.
    pub current: bool,
}

/// Parses a locale code the way the manager does.
pub fn get_locale(code: &str) -> Option<Locale> {
    Locale::parse(code).ok()
}

/// Persists `locale_code` as the language preference and makes it active.
///
/// `None` clears the preference and returns to the system default.
/// Malformed codes are stored verbatim; the active locale then falls back to
/// the system default.
pub fn update_language(ctx: &AppContext, locale_code: Option<&str>) {
    // Held until the configuration is set so the stored code and the active
    // locale change together.
    let mut prefs = ctx.prefs_mut();
    match locale_code {
        Some(code) => prefs.put_string(PREF_LANG, code),
        None => prefs.remove(PREF_LANG),
    }

    let locale = ctx.effective_locale(locale_code);
    debug!(code = ?locale_code, active = %locale, "language updated");
    ctx.set_configuration(locale);
}

/// The locale currently in effect.
pub fn get_current_locale(ctx: &AppContext) -> Locale {
    ctx.configuration()
}

/// Resolves `res` as if the active locale were `locale_code`.
///
/// Neither the stored preference nor the active locale are touched. A code
/// that does not parse resolves against the base catalog.
pub fn get_localized_string(ctx: &AppContext, locale_code: &str, res: StringRes) -> String {
    match get_locale(locale_code) {
        Some(locale) if locale == ctx.configuration() => ctx.get_string(res).to_string(),
        Some(locale) => resources::resolve(&locale, res).to_string(),
        None => {
            debug!(code = locale_code, "unparseable locale, using base catalog");
            resources::resolve_base(res).to_string()
        }
    }
}

/// Removes any language override, restoring the system default.
pub fn reset_system_language(ctx: &AppContext) {
    let mut prefs = ctx.prefs_mut();
    prefs.remove(PREF_LANG);
    let locale = ctx.system_default_locale();
    debug!(active = %locale, "language reset to system default");
    ctx.set_configuration(locale);
}

/// Every catalog language with its native name, sorted by tag.
pub fn get_languages(ctx: &AppContext) -> Vec<Language> {
    let current = ctx.configuration();
    let active_tag = resources::fallback_chain(&current)
        .into_iter()
        .find(|tag| resources::catalog_tags().iter().any(|known| *known == tag.as_str()));

    resources::catalog_tags()
        .iter()
        .map(|tag| Language {
            tag: (*tag).to_string(),
            name: resources::lookup_exact(tag, StringRes::LanguageName)
                .unwrap_or(*tag)
                .to_string(),
            current: active_tag.as_deref() == Some(*tag),
        })
        .collect()
}
