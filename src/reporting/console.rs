//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints command results to the console, either as colored,
//! translated text or as JSON for scripts.
//!
//! 此模块将命令结果打印到控制台，可以是彩色的翻译文本，也可以是供脚本使用的 JSON。

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::core::language::Language;
use crate::core::locale::Locale;
use crate::infra::t;

/// Where the active locale comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSource {
    /// A stored language preference.
    Preference,
    /// No usable preference; the system default applies.
    System,
}

/// Snapshot of the locale state printed by `get`.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleReport {
    pub active: Locale,
    pub source: LocaleSource,
    pub stored: Option<String>,
    pub system: Locale,
}

/// A resolved string printed by `string --json`.
#[derive(Debug, Clone, Serialize)]
pub struct StringReport<'a> {
    pub locale: &'a str,
    pub resource: &'a str,
    pub id: u32,
    pub value: &'a str,
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the locale state.
///
/// # Output Format / 输出格式
/// ```text
/// --- Current locale ---
///   - Active            | it_IT (from preference)
///   - Stored preference | it_IT
///   - System default    | en_US
/// ```
pub fn print_locale_report(report: &LocaleReport, locale: &str) {
    println!("{}", t!("current_locale_banner", locale = locale).bold());

    let source = match report.source {
        LocaleSource::Preference => t!("source_preference", locale = locale).green(),
        LocaleSource::System => t!("source_system", locale = locale).yellow(),
    };
    let none = t!("label_none", locale = locale);
    let stored = report.stored.as_deref().unwrap_or(none.as_ref());

    println!(
        "  - {:<18} | {} ({})",
        t!("label_active", locale = locale),
        report.active.to_string().cyan(),
        source
    );
    println!("  - {:<18} | {}", t!("label_stored", locale = locale), stored);
    println!("  - {:<18} | {}", t!("label_system", locale = locale), report.system);
}

/// Prints the catalog languages, marking the active one.
///
/// # Output Format / 输出格式
/// ```text
/// --- Available languages ---
///     ar       العربية
///   * it       Italiano
/// ```
pub fn print_languages(languages: &[Language], locale: &str) {
    println!("{}", t!("languages_banner", locale = locale).bold());

    for language in languages {
        if language.current {
            println!("  {} {:<8} {}", "*".green(), language.tag.green(), language.name.green());
        } else {
            println!("    {:<8} {}", language.tag, language.name);
        }
    }
}

/// Prints a confirmation line after the preference changed.
pub fn print_success(message: &str) {
    println!("{}", message.green());
}

/// Prints a warning that does not stop the command.
pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}
