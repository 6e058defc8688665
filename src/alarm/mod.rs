//! Alarm playback for the interval timer.
//!
//! The alarm is an external collaborator from the timer's point of view:
//! given a configured sound source it plays the sound to completion and
//! hands control back. The [`AlarmPlayer`] trait abstracts the playback
//! implementation ([`RodioAlarm`] in production, [`MockAlarm`] in tests).

mod driver;
mod embedded;
mod error;
mod source;

pub use driver::RodioAlarm;
pub use embedded::{embedded_alarm, EMBEDDED_ALARM};
pub use error::AlarmError;
pub use source::AlarmSource;

use tokio::sync::oneshot;

// ============================================================================
// AlarmPlayer
// ============================================================================

/// Trait for alarm playback implementations.
pub trait AlarmPlayer {
    /// Starts playing the configured alarm sound.
    ///
    /// Returns a receiver that resolves once playback has run to
    /// completion (or failed). The caller awaits it to preserve the
    /// blocking-playback contract while staying cancellable.
    ///
    /// # Errors
    ///
    /// Returns an error if the playback request cannot be issued.
    fn play(&mut self) -> Result<oneshot::Receiver<Result<(), AlarmError>>, AlarmError>;

    /// Tears the audio subsystem down. Must be safe to call repeatedly;
    /// only the first call does any work.
    fn shutdown(&mut self);
}

// ============================================================================
// MockAlarm
// ============================================================================

/// Mock alarm player for tests: completes instantly, counts calls.
#[derive(Debug, Default)]
pub struct MockAlarm {
    play_count: usize,
    shutdown_count: usize,
    should_fail: bool,
}

impl MockAlarm {
    /// Creates a mock that succeeds on every play.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `play` calls fail.
    pub fn set_should_fail(&mut self, should_fail: bool) {
        self.should_fail = should_fail;
    }

    /// Number of times `play` was called (including failed calls).
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_count
    }

    /// Number of times `shutdown` was called.
    #[must_use]
    pub fn shutdown_count(&self) -> usize {
        self.shutdown_count
    }
}

impl AlarmPlayer for MockAlarm {
    fn play(&mut self) -> Result<oneshot::Receiver<Result<(), AlarmError>>, AlarmError> {
        self.play_count += 1;
        if self.should_fail {
            return Err(AlarmError::PlaybackError("mock failure".to_string()));
        }
        let (done, completion) = oneshot::channel();
        let _ = done.send(Ok(()));
        Ok(completion)
    }

    fn shutdown(&mut self) {
        self.shutdown_count += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
