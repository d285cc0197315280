//! # Language Commands / 语言命令
//!
//! `list` prints every language the catalogs ship; `choose` offers them in an
//! interactive picker and stores the selection.
//!
//! `list` 打印目录提供的所有语言；`choose` 以交互方式提供选择并保存所选语言。

use anyhow::{Context, Result};
use dialoguer::{Select, theme::ColorfulTheme};

use crate::cli::commands::preference::commit;
use crate::cli::message_locale;
use crate::core::config::Settings;
use crate::core::context::AppContext;
use crate::core::language;
use crate::infra::t;
use crate::reporting::console::{print_json, print_languages, print_success};

/// Prints the catalog languages.
pub fn list(ctx: &AppContext, settings: &Settings, json: bool) -> Result<()> {
    let languages = language::get_languages(ctx);
    if json {
        return print_json(&languages);
    }
    print_languages(&languages, &message_locale(settings, ctx));
    Ok(())
}

/// Lets the user pick a language interactively.
///
/// The first entry stands for the system default and clears the preference.
/// Escape leaves the preference untouched.
pub fn choose(ctx: &AppContext, settings: &Settings) -> Result<()> {
    let locale = message_locale(settings, ctx);
    let languages = language::get_languages(ctx);

    let mut items = vec![t!(
        "choose_system_default",
        locale = &locale,
        code = ctx.system_default_locale()
    )
    .to_string()];
    items.extend(
        languages
            .iter()
            .map(|entry| format!("{:<8} {}", entry.tag, entry.name)),
    );

    let current = languages
        .iter()
        .position(|entry| entry.current)
        .map_or(0, |index| index + 1);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("choose_prompt", locale = &locale))
        .items(&items)
        .default(current)
        .interact_opt()
        .context(t!("choose_failed", locale = &locale).to_string())?;

    let Some(index) = selection else {
        println!("{}", t!("choose_aborted", locale = &locale));
        return Ok(());
    };

    match index.checked_sub(1).and_then(|i| languages.get(i)) {
        Some(picked) => language::update_language(ctx, Some(&picked.tag)),
        None => language::reset_system_language(ctx),
    }
    commit(ctx, settings)?;

    let active = language::get_current_locale(ctx).to_string();
    print_success(&t!(
        "language_updated",
        locale = &message_locale(settings, ctx),
        code = &active
    ));
    Ok(())
}
