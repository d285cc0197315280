//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the locale helper,
//! including the locale model, string resources, preference storage,
//! the application context and the language manager itself.
//!
//! 此模块包含 locale helper 的核心功能，
//! 包括区域模型、字符串资源、偏好存储、应用上下文以及语言管理器本身。

pub mod config;
pub mod context;
pub mod error;
pub mod language;
pub mod locale;
pub mod prefs;
pub mod resources;

// Re-exports
pub use context::AppContext;
pub use locale::Locale;
pub use resources::StringRes;
