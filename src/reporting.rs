//! # Reporting Module / 报告模块
//!
//! This module handles the display of command results. It prints colorful,
//! translated summaries to the console, or JSON when asked to.
//!
//! 此模块处理命令结果的显示。它在控制台打印彩色的翻译摘要，或按需输出 JSON。

pub mod console;

// Re-export common reporting functions
pub use console::{print_json, print_languages, print_locale_report};
