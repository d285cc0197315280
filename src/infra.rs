//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the locale helper,
//! including file system operations, system locale detection, logging
//! and i18n support for the command line output.
//!
//! 此模块为 locale helper 提供基础设施服务，
//! 包括文件系统操作、系统区域检测、日志以及命令行输出的国际化支持。

pub mod fs;
pub mod logging;
pub mod system;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
