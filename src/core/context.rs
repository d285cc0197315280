//! # Application Context / 应用上下文
//!
//! The context owns everything locale resolution depends on: the preference
//! store, the system locale provider and the active display locale (the
//! "configuration"). It is shared by reference; interior state sits behind
//! `RwLock`s. Writers take the preference lock before the configuration lock
//! and hold it across both updates.
//!
//! 上下文拥有区域解析所依赖的一切：偏好存储、系统区域提供者以及当前显示区域。

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::core::error::PrefsError;
use crate::core::locale::Locale;
use crate::core::prefs::{PREF_LANG, PreferenceStore};
use crate::core::resources::{self, StringRes};
use crate::infra::system::SystemLocale;

/// Locale assumed when the operating system reports nothing usable.
pub fn fallback_system_locale() -> Locale {
    Locale::new("en", Some("US"))
}

pub struct AppContext {
    prefs: RwLock<Box<dyn PreferenceStore>>,
    system: Box<dyn SystemLocale>,
    configuration: RwLock<Locale>,
}

impl AppContext {
    /// Builds a context and applies the stored language preference, if any.
    pub fn attach(prefs: impl PreferenceStore + 'static, system: impl SystemLocale + 'static) -> Self {
        let ctx = Self {
            prefs: RwLock::new(Box::new(prefs)),
            system: Box::new(system),
            configuration: RwLock::new(fallback_system_locale()),
        };

        let stored = ctx.prefs().get_string(PREF_LANG);
        let active = ctx.effective_locale(stored.as_deref());
        debug!(stored = ?stored, active = %active, "context attached");
        ctx.set_configuration(active);
        ctx
    }

    /// The locale the operating system reports, or `en_US` when detection fails.
    pub fn system_default_locale(&self) -> Locale {
        match self.system.system_locale() {
            // The POSIX locale names no language.
            Some(raw) if matches!(raw.trim(), "C" | "POSIX") => fallback_system_locale(),
            Some(raw) => Locale::parse(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "unusable system locale, assuming en_US");
                fallback_system_locale()
            }),
            None => fallback_system_locale(),
        }
    }

    /// The active display locale.
    pub fn configuration(&self) -> Locale {
        self.configuration
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolves `res` under the active display locale.
    pub fn get_string(&self, res: StringRes) -> &'static str {
        resources::resolve(&self.configuration(), res)
    }

    /// Flushes pending preference edits to the backing store.
    pub fn commit(&self) -> Result<(), PrefsError> {
        self.prefs_mut().commit()
    }

    /// Reads a raw preference value.
    pub fn preference(&self, key: &str) -> Option<String> {
        self.prefs().get_string(key)
    }

    /// The locale a stored code stands for: the code itself when it parses,
    /// the system default otherwise.
    pub(crate) fn effective_locale(&self, code: Option<&str>) -> Locale {
        match code.map(Locale::parse) {
            Some(Ok(locale)) => locale,
            Some(Err(e)) => {
                warn!(error = %e, "falling back to the system locale");
                self.system_default_locale()
            }
            None => self.system_default_locale(),
        }
    }

    pub(crate) fn set_configuration(&self, locale: Locale) {
        *self
            .configuration
            .write()
            .unwrap_or_else(PoisonError::into_inner) = locale;
    }

    pub(crate) fn prefs(&self) -> RwLockReadGuard<'_, Box<dyn PreferenceStore>> {
        self.prefs.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn prefs_mut(&self) -> RwLockWriteGuard<'_, Box<dyn PreferenceStore>> {
        self.prefs.write().unwrap_or_else(PoisonError::into_inner)
    }
}
