//! # Preference Commands / 偏好命令
//!
//! `get`, `set` and `reset`: read and change the persisted language
//! preference.
//!
//! `get`、`set` 和 `reset`：读取和修改持久化的语言偏好。

use anyhow::{Context, Result};

use crate::cli::message_locale;
use crate::core::config::Settings;
use crate::core::context::AppContext;
use crate::core::language;
use crate::core::prefs::PREF_LANG;
use crate::infra::t;
use crate::reporting::console::{
    LocaleReport, LocaleSource, print_json, print_locale_report, print_success, print_warning,
};

/// Builds the snapshot printed by `get`.
pub fn locale_report(ctx: &AppContext) -> LocaleReport {
    let stored = ctx.preference(PREF_LANG);
    let source = match stored.as_deref().and_then(language::get_locale) {
        Some(_) => LocaleSource::Preference,
        None => LocaleSource::System,
    };

    LocaleReport {
        active: language::get_current_locale(ctx),
        source,
        stored,
        system: ctx.system_default_locale(),
    }
}

/// Prints the active locale and where it comes from.
pub fn get(ctx: &AppContext, settings: &Settings, json: bool) -> Result<()> {
    let report = locale_report(ctx);
    if json {
        return print_json(&report);
    }
    print_locale_report(&report, &message_locale(settings, ctx));
    Ok(())
}

/// Persists `code` as the language preference, or clears it when `None`.
pub fn set(ctx: &AppContext, settings: &Settings, code: Option<&str>) -> Result<()> {
    language::update_language(ctx, code);
    commit(ctx, settings)?;

    // Confirm in the language just chosen, unless --lang says otherwise.
    let locale = message_locale(settings, ctx);
    let active = language::get_current_locale(ctx).to_string();
    match code {
        Some(code) if language::get_locale(code).is_none() => {
            print_warning(&t!("malformed_locale_warning", locale = &locale, code = code));
        }
        Some(_) => print_success(&t!("language_updated", locale = &locale, code = &active)),
        None => print_success(&t!("language_cleared", locale = &locale, code = &active)),
    }
    Ok(())
}

/// Removes the language preference.
pub fn reset(ctx: &AppContext, settings: &Settings) -> Result<()> {
    language::reset_system_language(ctx);
    commit(ctx, settings)?;

    let active = language::get_current_locale(ctx).to_string();
    print_success(&t!(
        "language_reset",
        locale = &message_locale(settings, ctx),
        code = &active
    ));
    Ok(())
}

pub(crate) fn commit(ctx: &AppContext, settings: &Settings) -> Result<()> {
    ctx.commit().with_context(|| {
        t!(
            "prefs_save_failed",
            path = settings.prefs_path.display()
        )
        .to_string()
    })
}
