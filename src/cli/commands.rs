//! # Commands Module / 命令模块
//!
//! One submodule per group of subcommands.
//!
//! 每组子命令一个子模块。

pub mod languages;
pub mod preference;
pub mod string;
