//! Logging bootstrap for the binary
//!
//! Library code logs through the `log` facade; the binary starts one
//! `flexi_logger` backend writing to stderr. `RUST_LOG` takes precedence over
//! the configured level.

use flexi_logger::{Logger, LoggerHandle};

use crate::error::{PaydayError, PaydayResult};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Normalize a configured level name
pub fn normalize_level(level: &str) -> PaydayResult<&'static str> {
    let wanted = level.trim().to_lowercase();
    LEVELS
        .iter()
        .find(|l| **l == wanted)
        .copied()
        .ok_or_else(|| {
            PaydayError::Config(format!(
                "unsupported log level `{}`; expected one of {}",
                level,
                LEVELS.join(", ")
            ))
        })
}

/// Raise a base level by `verbosity` steps, saturating at trace
pub fn effective_level(base: &str, verbosity: u8) -> PaydayResult<&'static str> {
    let base = normalize_level(base)?;
    let index = LEVELS.iter().position(|l| *l == base).unwrap_or(2);
    let raised = (index + verbosity as usize).min(LEVELS.len() - 1);
    Ok(LEVELS[raised])
}

/// Start the stderr logger; the returned handle must stay alive
pub fn init_logging(level: &str, verbosity: u8) -> PaydayResult<LoggerHandle> {
    let level = effective_level(level, verbosity)?;
    // -v flags override RUST_LOG
    let logger = if verbosity > 0 {
        Logger::try_with_str(level)
    } else {
        Logger::try_with_env_or_str(level)
    };
    let logger =
        logger.map_err(|e| PaydayError::Config(format!("invalid log specification: {}", e)))?;

    logger
        .log_to_stderr()
        .start()
        .map_err(|e| PaydayError::Config(format!("failed to start logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level(" WARN ").unwrap(), "warn");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn test_effective_level_saturates() {
        assert_eq!(effective_level("warn", 0).unwrap(), "warn");
        assert_eq!(effective_level("warn", 1).unwrap(), "info");
        assert_eq!(effective_level("warn", 9).unwrap(), "trace");
    }
}
