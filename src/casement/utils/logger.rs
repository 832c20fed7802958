use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode, detailed_format};
use std::path::PathBuf;

use crate::casement::utils::paths;

/// Get the path to the log file, creating the configuration directory if needed
///
/// ### Returns
/// - `Ok(PathBuf)`: The path to the log file
/// - `Err(anyhow::Error)`: If the configuration directory could not be determined or created
pub fn log_file_path() -> anyhow::Result<PathBuf> {
    paths::config_file("casement.log")
}

/// Initialize the file logger
///
/// The returned handle must be kept alive for as long as the application logs.
///
/// ### Returns
/// - `Ok(LoggerHandle)`: If the logger was initialized successfully
/// - `Err(anyhow::Error)`: If the logger could not be initialized
pub fn init() -> anyhow::Result<LoggerHandle> {
    let log_dir = paths::config_dir()?;
    #[cfg(debug_assertions)]
    let log_level = "debug";
    #[cfg(not(debug_assertions))]
    let log_level = "info";
    let handle = Logger::try_with_env_or_str(log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename("casement")
                .suppress_timestamp(),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .format(detailed_format)
        .start()?;
    log::info!("Logger initialized at: {:?}", log_file_path()?);
    Ok(handle)
}
