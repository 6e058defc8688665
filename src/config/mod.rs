//! Startup configuration for the interval timer.
//!
//! Resolves the parsed CLI arguments into a validated configuration:
//! the countdown cycle (with the 25/5 default) and the alarm sound source.
//! All validation happens here, before any timer logic runs.

use std::path::PathBuf;

use thiserror::Error;

use crate::alarm::AlarmSource;
use crate::cli::Cli;

/// The default countdown cycle in minutes: 25 work, 5 break.
pub const DEFAULT_CYCLE: &[u32] = &[25, 5];

// ============================================================================
// ConfigError
// ============================================================================

/// Fatal configuration errors, surfaced before the first countdown starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured sound path does not exist.
    #[error("sound file not found: {0}")]
    SoundFileMissing(PathBuf),

    /// The configured sound path exists but is not a regular file.
    #[error("sound path is not a regular file: {0}")]
    NotAFile(PathBuf),

    /// The countdown cycle is empty. The CLI default makes this unreachable
    /// from the binary, but the library constructor still rejects it.
    #[error("countdown cycle must contain at least one duration")]
    EmptyCycle,
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Ordered countdown durations in minutes, cycled forever.
    pub cycle: Vec<u32>,
    /// Where the alarm sound comes from.
    pub sound: AlarmSource,
}

impl TimerConfig {
    /// Resolves the CLI arguments into a configuration.
    ///
    /// An empty countdown list falls back to [`DEFAULT_CYCLE`]. A
    /// user-supplied sound path must name an existing regular file;
    /// without one the bundled embedded sound is used.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the sound path is missing or not a
    /// regular file.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let cycle = if cli.countdowns.is_empty() {
            DEFAULT_CYCLE.to_vec()
        } else {
            cli.countdowns.clone()
        };

        let sound = match &cli.sound_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::SoundFileMissing(path.clone()));
            }
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotAFile(path.clone()));
            }
            Some(path) => AlarmSource::file(path.clone()),
            None => AlarmSource::Embedded,
        };

        Ok(Self { cycle, sound })
    }
}

// ============================================================================
// Tests
// ============================================================================
