//! # String Resources / 字符串资源
//!
//! Compile-time string catalogs generated by `build.rs` from
//! `resources/strings/*.toml`, and the resolution rules used to pick a value
//! for a locale.
//!
//! 由 `build.rs` 从 `resources/strings/*.toml` 生成的编译期字符串目录，
//! 以及为某个区域选择值的解析规则。
//!
//! ## Resolution / 解析
//!
//! A resource is looked up along a fallback chain of catalog tags:
//! `language_COUNTRY`, then `language`, then the base catalog `en`. The first
//! catalog that translates the resource wins.
//!
//! ```text
//! zh_TW -> ["zh_TW", "zh", "en"]
//! pt_PT -> ["pt_PT", "pt", "en"]
//! he_IL -> ["iw_IL", "iw", "en"]
//! ```

use std::str::FromStr;

use crate::core::error::LocaleError;
use crate::core::locale::Locale;

include!(concat!(env!("OUT_DIR"), "/strings.rs"));

/// Tag of the catalog every resource is guaranteed to exist in.
pub const BASE_TAG: &str = "en";

impl StringRes {
    /// Integer resource id.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Finds a resource by its integer id.
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|res| res.id() == id)
    }

    /// Finds a resource by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|res| res.name() == name)
    }
}

impl FromStr for StringRes {
    type Err = LocaleError;

    /// Accepts a resource name (`add_note`), a decimal id or a `0x` hex id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let by_id = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => s.parse::<u32>().ok(),
        };
        by_id
            .and_then(StringRes::from_id)
            .or_else(|| StringRes::from_name(s))
            .ok_or_else(|| LocaleError::UnknownResource(s.to_string()))
    }
}

/// Every catalog tag shipped with the crate, sorted.
pub fn catalog_tags() -> &'static [&'static str] {
    CATALOG_TAGS
}

/// Maps modern ISO 639 codes onto the legacy codes the catalogs are filed under.
pub fn catalog_language(language: &str) -> &str {
    match language {
        "he" => "iw",
        "id" => "in",
        "yi" => "ji",
        other => other,
    }
}

/// The ordered catalog tags consulted for `locale`.
pub fn fallback_chain(locale: &Locale) -> Vec<String> {
    let language = catalog_language(locale.language());
    let mut chain = Vec::with_capacity(3);

    if let Some(country) = locale.country() {
        chain.push(format!("{language}_{country}"));
    }
    chain.push(language.to_string());
    if language != BASE_TAG {
        chain.push(BASE_TAG.to_string());
    }
    chain
}

/// Resolves `res` for `locale`.
pub fn resolve(locale: &Locale, res: StringRes) -> &'static str {
    fallback_chain(locale)
        .iter()
        .find_map(|tag| lookup(tag, res))
        .unwrap_or_else(|| base_value(res))
}

/// Resolves `res` in the base catalog only.
pub fn resolve_base(res: StringRes) -> &'static str {
    base_value(res)
}

/// Resolves `res` in exactly one catalog, without fallback.
pub fn lookup_exact(tag: &str, res: StringRes) -> Option<&'static str> {
    lookup(tag, res)
}
