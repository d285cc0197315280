//! # Logging / 日志
//!
//! Diagnostic logging through `tracing`. Library code only emits events; the
//! binary installs the subscriber once at startup. Diagnostics go to stderr so
//! they never mix with command output.
//!
//! 通过 `tracing` 输出诊断日志。库代码只产生事件；二进制程序在启动时安装订阅者。

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "LOCALE_HELPER_LOG";

/// Maps the number of `-v` flags to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
