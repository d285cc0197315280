// src/cli.rs
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;

use crate::core::config::{PREFS_ENV, SYSTEM_LOCALE_ENV, Settings};
use crate::core::context::AppContext;
use crate::core::prefs::FilePreferences;
use crate::infra::{logging, t};
use crate::ui_locale;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows help texts to be translated before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

fn json_flag(locale: &str) -> Arg {
    Arg::new("json")
        .long("json")
        .help(t!("arg_json", locale = locale).to_string())
        .action(ArgAction::SetTrue)
}

fn build_cli(locale: &str) -> Command {
    Command::new("locale-helper")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("prefs")
                .long("prefs")
                .help(t!("arg_prefs", locale = locale).to_string())
                .value_name("PATH")
                .env(PREFS_ENV)
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("system-locale")
                .long("system-locale")
                .help(t!("arg_system_locale", locale = locale).to_string())
                .value_name("CODE")
                .env(SYSTEM_LOCALE_ENV)
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("get")
                .about(t!("cmd_get_about", locale = locale).to_string())
                .arg(json_flag(locale)),
        )
        .subcommand(
            Command::new("set")
                .about(t!("cmd_set_about", locale = locale).to_string())
                .arg(
                    Arg::new("code")
                        .help(t!("arg_code", locale = locale).to_string())
                        .value_name("CODE")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("reset").about(t!("cmd_reset_about", locale = locale).to_string()))
        .subcommand(
            Command::new("string")
                .about(t!("cmd_string_about", locale = locale).to_string())
                .arg(
                    Arg::new("locale")
                        .help(t!("arg_locale", locale = locale).to_string())
                        .value_name("LOCALE")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("resource")
                        .help(t!("arg_resource", locale = locale).to_string())
                        .value_name("RESOURCE")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(json_flag(locale)),
        )
        .subcommand(
            Command::new("list")
                .about(t!("cmd_list_about", locale = locale).to_string())
                .arg(json_flag(locale)),
        )
        .subcommand(Command::new("choose").about(t!("cmd_choose_about", locale = locale).to_string()))
}

fn settings_from(matches: &ArgMatches) -> Result<Settings> {
    let value = |id: &str| matches.get_one::<String>(id).map(String::as_str);
    Settings::resolve(
        value("prefs"),
        value("system-locale"),
        value("lang"),
        matches.get_count("verbose"),
    )
}

/// Opens the preference file named by `settings` and attaches a context to it.
pub fn open_context(settings: &Settings) -> Result<AppContext> {
    let prefs = FilePreferences::open(&settings.prefs_path).with_context(|| {
        t!(
            "prefs_open_failed",
            path = settings.prefs_path.display()
        )
        .to_string()
    })?;
    Ok(AppContext::attach(prefs, settings.system_locale_provider()))
}

/// Language of the helper's messages: `--lang` when given, otherwise the
/// application's active locale.
pub fn message_locale(settings: &Settings, ctx: &AppContext) -> String {
    match &settings.ui_language {
        Some(lang) => ui_locale(lang),
        None => ui_locale(&ctx.configuration().tag()),
    }
}

pub fn run() -> Result<()> {
    // Pre-parse language so the help texts come out translated.
    let requested = pre_parse_language()
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let help_locale = ui_locale(&requested);
    rust_i18n::set_locale(&help_locale);

    let matches = build_cli(&help_locale).get_matches();
    let settings = settings_from(&matches)?;
    logging::init(settings.verbosity);
    tracing::debug!(?settings, "settings resolved");

    let ctx = open_context(&settings)?;

    match matches.subcommand() {
        Some(("get", sub)) => commands::preference::get(&ctx, &settings, sub.get_flag("json"))?,
        Some(("set", sub)) => {
            let code = sub.get_one::<String>("code").map(String::as_str);
            commands::preference::set(&ctx, &settings, code)?;
        }
        Some(("reset", _)) => commands::preference::reset(&ctx, &settings)?,
        Some(("string", sub)) => {
            // Both are required; clap rejects the command line otherwise.
            let locale = sub.get_one::<String>("locale").map(String::as_str).unwrap_or_default();
            let resource = sub.get_one::<String>("resource").map(String::as_str).unwrap_or_default();
            commands::string::execute(&ctx, &settings, locale, resource, sub.get_flag("json"))?;
        }
        Some(("list", sub)) => commands::languages::list(&ctx, &settings, sub.get_flag("json"))?,
        Some(("choose", _)) => commands::languages::choose(&ctx, &settings)?,
        _ => {
            // subcommand_required: clap has already printed help and exited.
        }
    }
    Ok(())
}
