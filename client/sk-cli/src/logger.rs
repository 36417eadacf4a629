use crate::{CliError, Result as CliErrorResult};

use sk_config::LogLevel;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Installs the global fern logger.
///
/// Records go to `log_file` when given, otherwise to stderr so stdout only
/// carries command output. Colors apply to stderr only.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let colors = (colored && log_file.is_none()).then(level_colors);

    let dispatch = Dispatch::new()
        .level(*log_level)
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} {level}] {}: {message}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.target(),
            ))
        });

    let dispatch = match &log_file {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
            })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    debug!(
        "Logging at {} to {}",
        *log_level,
        log_file
            .as_deref()
            .map_or_else(|| "stderr".to_string(), |p| p.display().to_string())
    );
    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}
