// src/logging.rs

use std::path::Path;

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

/// Starts file logging under `dir`. The TUI owns the terminal, so nothing
/// may log to stdout or stderr while the alternate screen is active. The
/// returned handle must stay alive for the lifetime of the program.
pub fn init_logging(level: &str, dir: &Path) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_str(level)?
        .log_to_file(FileSpec::default().directory(dir).basename("omikuji"))
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    Ok(handle)
}
