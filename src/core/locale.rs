//! # Locale Model / 区域模型
//!
//! Structured locale codes. Codes are accepted in the underscore form used by
//! preference files (`it_IT`) or as BCP 47 tags (`it-IT`); POSIX suffixes such
//! as `.UTF-8` or `@euro` are dropped. `Display` always renders the underscore
//! form so a stored code survives a parse/display round trip.
//!
//! 结构化的区域代码。接受下划线形式（`it_IT`）或 BCP 47 标签（`it-IT`），
//! 并去除 `.UTF-8`、`@euro` 等 POSIX 后缀。

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use unic_langid::subtags;

use crate::core::error::LocaleError;

/// A language, with optional script, country and variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// Builds a locale from a language and optional country, normalizing case.
    ///
    /// No validation is done here; use [`Locale::parse`] for untrusted input.
    pub fn new(language: &str, country: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            script: None,
            country: country
                .filter(|c| !c.is_empty())
                .map(|c| c.to_ascii_uppercase()),
            variant: None,
        }
    }

    /// Parses a locale code.
    ///
    /// # Arguments / 参数
    /// * `code` - `it`, `it_IT`, `it-IT`, `zh-Hant-TW`, `en_US.UTF-8`, `sr_RS@latin`, ...
    ///
    /// # Errors
    /// Returns [`LocaleError::Malformed`] when the language or country subtag
    /// is not well formed.
    pub fn parse(code: &str) -> Result<Self, LocaleError> {
        let malformed = || LocaleError::Malformed(code.to_string());

        let stripped = code.trim().split(['.', '@']).next().unwrap_or_default();
        let mut parts = stripped.split(['_', '-']);

        let language = parts.next().filter(|l| !l.is_empty()).ok_or_else(malformed)?;
        subtags::Language::from_str(language).map_err(|_| malformed())?;

        let mut locale = Locale::new(language, None);
        let mut rest: Vec<&str> = parts.collect();

        let script = rest
            .first()
            .filter(|candidate| candidate.len() == 4)
            .and_then(|candidate| subtags::Script::from_str(candidate).ok());
        if let Some(script) = script {
            locale.script = Some(script.as_str().to_string());
            rest.remove(0);
        }

        if let Some(country) = rest.first() {
            if country.is_empty() {
                return Err(malformed());
            }
            let region = subtags::Region::from_str(country).map_err(|_| malformed())?;
            locale.country = Some(region.as_str().to_string());
            rest.remove(0);
        }

        if !rest.is_empty() {
            if rest.iter().any(|v| v.is_empty() || !v.chars().all(|c| c.is_ascii_alphanumeric())) {
                return Err(malformed());
            }
            locale.variant = Some(rest.join("_"));
        }

        Ok(locale)
    }

    /// Lowercase ISO 639 language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Uppercase ISO 3166 country code (or UN M.49 area code).
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// BCP 47 rendering, e.g. `zh-Hant-TW`.
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        for part in [&self.script, &self.country, &self.variant].into_iter().flatten() {
            tag.push('-');
            tag.push_str(&part.replace('_', "-"));
        }
        tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        for part in [&self.script, &self.country, &self.variant].into_iter().flatten() {
            write!(f, "_{part}")?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_underscore_codes() {
        for code in [
            "it", "it_IT", "zh_TW", "es_XA", "sr_SP", "iw_IL", "in_ID", "zh_Hant_TW", "sr_Latn",
            "de_DE_POSIX",
        ] {
            assert_eq!(Locale::parse(code).unwrap().to_string(), code);
        }
    }

    #[test]
    fn parse_normalizes_case_and_separator() {
        let locale = Locale::parse("PT-br").unwrap();
        assert_eq!(locale.language(), "pt");
        assert_eq!(locale.country(), Some("BR"));
        assert_eq!(locale.to_string(), "pt_BR");
        assert_eq!(locale.tag(), "pt-BR");
    }

    #[test]
    fn parse_strips_posix_suffixes() {
        assert_eq!(Locale::parse("en_US.UTF-8").unwrap(), Locale::new("en", Some("US")));
        assert_eq!(Locale::parse("sr_RS@latin").unwrap(), Locale::new("sr", Some("RS")));
    }

    #[test]
    fn parse_reads_script_subtag() {
        let locale = Locale::parse("zh-Hant-TW").unwrap();
        assert_eq!(locale.script(), Some("Hant"));
        assert_eq!(locale.country(), Some("TW"));
        assert_eq!(locale.tag(), "zh-Hant-TW");
        assert_eq!(locale.to_string(), "zh_Hant_TW");
        assert_eq!(Locale::parse(&locale.to_string()).unwrap(), locale);
    }

    #[test]
    fn parse_rejects_garbage() {
        for code in ["", "   ", "x", "it_", "!!", "it_ITALY1", "toolonglanguage"] {
            assert!(Locale::parse(code).is_err(), "{code:?} should be rejected");
        }
    }

    #[test]
    fn parse_keeps_variant_after_country() {
        assert!(Locale::parse("de__POSIX").is_err());
        let locale = Locale::parse("de_DE_POSIX").unwrap();
        assert_eq!(locale.variant(), Some("POSIX"));
        assert_eq!(locale.to_string(), "de_DE_POSIX");
    }
}
