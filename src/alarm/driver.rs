//! Alarm playback on a dedicated audio thread.
//!
//! The session's contract is "play the alarm and tell me when it is done":
//! playback must run to completion before the acknowledgment prompt, but
//! the top-level interrupt handler has to stay responsive while it plays.
//! A single audio thread owns the rodio output stream, receives play
//! requests over a channel, plays each sound to completion, and reports
//! back over a oneshot the session can await.
//!
//! The output stream is opened lazily on the first request and lives until
//! the request channel closes at shutdown, so the audio device is acquired
//! once and released exactly once.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::embedded::embedded_alarm;
use super::error::AlarmError;
use super::source::AlarmSource;
use super::AlarmPlayer;

/// A request to play the configured alarm once.
struct PlayRequest {
    done: oneshot::Sender<Result<(), AlarmError>>,
}

// ============================================================================
// RodioAlarm
// ============================================================================

/// Alarm player backed by rodio on a dedicated audio thread.
pub struct RodioAlarm {
    requests: Option<Sender<PlayRequest>>,
    thread: Option<JoinHandle<()>>,
}

impl RodioAlarm {
    /// Spawns the audio thread for the given alarm source.
    ///
    /// No audio hardware is touched here; the output stream is opened on
    /// the first play request, so construction cannot fail even without an
    /// audio device.
    #[must_use]
    pub fn spawn(source: AlarmSource) -> Self {
        let (requests, receiver) = unbounded();
        debug!(%source, "spawning audio thread");

        let thread = thread::spawn(move || audio_thread(&source, &receiver));

        Self {
            requests: Some(requests),
            thread: Some(thread),
        }
    }
}

impl AlarmPlayer for RodioAlarm {
    fn play(&mut self) -> Result<oneshot::Receiver<Result<(), AlarmError>>, AlarmError> {
        let requests = self.requests.as_ref().ok_or(AlarmError::Closed)?;
        let (done, completion) = oneshot::channel();
        requests
            .send(PlayRequest { done })
            .map_err(|_| AlarmError::Closed)?;
        Ok(completion)
    }

    fn shutdown(&mut self) {
        // Closing the channel ends the audio thread's request loop, which
        // drops the output stream.
        if let Some(requests) = self.requests.take() {
            drop(requests);
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("audio thread panicked during shutdown");
            } else {
                debug!("audio subsystem torn down");
            }
        }
    }
}

impl Drop for RodioAlarm {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for RodioAlarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioAlarm")
            .field("running", &self.thread.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Audio thread
// ============================================================================

fn audio_thread(source: &AlarmSource, requests: &Receiver<PlayRequest>) {
    let mut output: Option<(OutputStream, OutputStreamHandle)> = None;

    for request in requests {
        let result = play_once(&mut output, source);
        if request.done.send(result).is_err() {
            debug!("alarm completion receiver dropped");
        }
    }

    // The request channel closed: `output` drops here, releasing the
    // audio device before the thread exits.
    debug!("audio thread exiting");
}

/// Plays the alarm source to completion, opening the output stream on the
/// first call.
fn play_once(
    output: &mut Option<(OutputStream, OutputStreamHandle)>,
    source: &AlarmSource,
) -> Result<(), AlarmError> {
    let handle = if let Some((_stream, handle)) = output.as_ref() {
        handle.clone()
    } else {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| AlarmError::DeviceNotAvailable(e.to_string()))?;
        debug!("audio output stream initialized");
        let cloned = handle.clone();
        *output = Some((stream, handle));
        cloned
    };

    match source {
        AlarmSource::File { path } => {
            debug!(path = %path.display(), "playing alarm file");
            let file = File::open(path)
                .map_err(|e| AlarmError::FileNotFound(format!("{}: {}", path.display(), e)))?;
            let decoder = Decoder::new(BufReader::new(file))
                .map_err(|e| AlarmError::DecodeError(e.to_string()))?;
            play_to_completion(&handle, decoder)
        }
        AlarmSource::Embedded => {
            debug!("playing bundled alarm");
            let decoder = Decoder::new(Cursor::new(embedded_alarm()))
                .map_err(|e| AlarmError::DecodeError(format!("bundled alarm: {}", e)))?;
            play_to_completion(&handle, decoder)
        }
    }
}

/// Appends the decoded sound to a sink and blocks until it finishes.
fn play_to_completion<R>(
    handle: &OutputStreamHandle,
    decoder: Decoder<R>,
) -> Result<(), AlarmError>
where
    R: std::io::Read + std::io::Seek + Send + Sync + 'static,
{
    let sink = Sink::try_new(handle).map_err(|e| AlarmError::StreamError(e.to_string()))?;
    sink.append(decoder);
    sink.sleep_until_end();
    debug!("alarm playback finished");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
