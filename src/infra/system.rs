//! # System Locale / 系统区域
//!
//! Detection of the operating system locale.
//!
//! 检测操作系统的区域设置。

/// Source of the operating system's locale.
pub trait SystemLocale: Send + Sync {
    /// Return the raw system locale string when available.
    fn system_locale(&self) -> Option<String>;
}

/// System locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A system locale pinned to a fixed value.
///
/// Used for `--system-locale` and in tests, where the host locale must not
/// leak into the result.
#[derive(Debug, Clone)]
pub struct FixedLocale(pub String);

impl FixedLocale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl SystemLocale for FixedLocale {
    fn system_locale(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<T: SystemLocale + ?Sized> SystemLocale for Box<T> {
    fn system_locale(&self) -> Option<String> {
        (**self).system_locale()
    }
}
