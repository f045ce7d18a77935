//! Logging setup for the application
//!
//! The TUI owns the terminal, so log output goes to a file configured in
//! `[logging]`. When logging is disabled nothing is installed and the `log`
//! macros become no-ops.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Install the file logger described by the configuration
///
/// Does nothing when logging is disabled. Must be called at most once.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_file = fern::log_file(&config.file)
        .with_context(|| format!("Failed to open log file: {}", config.file))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
