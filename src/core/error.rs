//! # Error Types / 错误类型
//!
//! Typed errors raised by the library. The locale manager operations
//! themselves never fail; these surface from parsing and from flushing
//! preferences to disk.
//!
//! 库抛出的类型化错误。区域管理操作本身不会失败；这些错误来自解析和将偏好写入磁盘。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while interpreting locale codes and resource names.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("malformed locale code `{0}`")]
    Malformed(String),

    #[error("unknown string resource `{0}`")]
    UnknownResource(String),
}

/// Errors produced by persistent preference stores.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize preferences")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to replace preference file")]
    Persist(#[from] tempfile::PersistError),
}
