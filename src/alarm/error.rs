//! Alarm playback error types.

use thiserror::Error;

/// Errors that can occur while playing the alarm sound.
///
/// None of these are fatal to the session: playback failures are logged
/// and the timer proceeds to the acknowledgment prompt without retrying.
#[derive(Debug, Error)]
pub enum AlarmError {
    /// No audio output device is available.
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// The sound file disappeared or became unreadable after startup.
    #[error("sound file not found: {0}")]
    FileNotFound(String),

    /// The sound data could not be decoded.
    #[error("failed to decode sound: {0}")]
    DecodeError(String),

    /// The audio output stream could not be opened.
    #[error("failed to open audio stream: {0}")]
    StreamError(String),

    /// Generic playback failure.
    #[error("sound playback failed: {0}")]
    PlaybackError(String),

    /// The audio subsystem has already been torn down.
    #[error("audio subsystem is shut down")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlarmError::DeviceNotAvailable("no device".to_string());
        assert!(err.to_string().contains("no device"));

        let err = AlarmError::FileNotFound("/path/to/alarm.wav".to_string());
        assert!(err.to_string().contains("/path/to/alarm.wav"));

        let err = AlarmError::DecodeError("bad header".to_string());
        assert!(err.to_string().contains("bad header"));

        let err = AlarmError::Closed;
        assert!(err.to_string().contains("shut down"));
    }
}
