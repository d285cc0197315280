//! # String Command / 字符串命令
//!
//! `string`: resolves one string resource under a given locale without
//! changing the active one.
//!
//! `string`：在不改变当前区域的情况下，以指定区域解析一个字符串资源。

use anyhow::{Result, anyhow};

use crate::cli::message_locale;
use crate::core::config::Settings;
use crate::core::context::AppContext;
use crate::core::language;
use crate::core::resources::StringRes;
use crate::infra::t;
use crate::reporting::console::{StringReport, print_json};

/// Prints string resource `resource` (name or id) as resolved under `locale_code`.
pub fn execute(
    ctx: &AppContext,
    settings: &Settings,
    locale_code: &str,
    resource: &str,
    json: bool,
) -> Result<()> {
    let res: StringRes = resource.parse().map_err(|_| {
        anyhow!(
            "{}",
            t!(
                "unknown_resource",
                locale = &message_locale(settings, ctx),
                name = resource
            )
        )
    })?;

    let value = language::get_localized_string(ctx, locale_code, res);
    if json {
        return print_json(&StringReport {
            locale: locale_code,
            resource: res.name(),
            id: res.id(),
            value: &value,
        });
    }

    println!("{value}");
    Ok(())
}
