//! Session controller: the top-level timer loop.
//!
//! Drives the state machine
//! `COUNTING → ALARMING → AWAITING_ACK → COUNTING …`, pulling each
//! countdown duration from the interval source, running the countdown
//! loop, sounding the alarm, and blocking for the user's acknowledgment.
//! The terminal `STOPPED` state is entered via [`Session::stop`] when the
//! process-level interrupt handler fires.
//!
//! Phase transitions are published as [`SessionEvent`]s over an optional
//! channel so tests can assert their ordering.

use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::alarm::AlarmPlayer;
use crate::countdown::Countdown;
use crate::intervals::IntervalSource;
use crate::render::WidthSource;

/// Prompt shown while waiting for the user's acknowledgment.
pub const ACK_PROMPT: &str = "Press return to reset";

/// Parting message printed on interruption.
pub const FAREWELL: &str = "Goodbye!";

// ============================================================================
// SessionPhase
// ============================================================================

/// The session controller's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Running a countdown.
    Counting,
    /// Playing the alarm to completion.
    Alarming,
    /// Blocked on the user's acknowledgment.
    AwaitingAck,
    /// Terminal state, entered on cancellation.
    Stopped,
}

impl SessionPhase {
    /// Returns the string representation of the phase.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Counting => "counting",
            SessionPhase::Alarming => "alarming",
            SessionPhase::AwaitingAck => "awaiting_ack",
            SessionPhase::Stopped => "stopped",
        }
    }
}

// ============================================================================
// SessionEvent
// ============================================================================

/// Session events, published in transition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A countdown started.
    CountingStarted {
        /// Interval duration in minutes.
        minutes: u32,
    },
    /// A countdown ran to completion.
    CountingFinished {
        /// Interval duration in minutes.
        minutes: u32,
    },
    /// Alarm playback started.
    AlarmStarted,
    /// Alarm playback finished (or degraded silently).
    AlarmFinished,
    /// Waiting for the user's acknowledgment.
    AwaitingAck,
    /// The user acknowledged; the next countdown follows.
    Acknowledged,
    /// The session was stopped.
    Stopped,
}

// ============================================================================
// SessionError
// ============================================================================

/// Errors that end the session loop.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The interval source ran out. Unreachable with a non-empty cycle,
    /// handled with a diagnostic rather than an unhandled fault.
    #[error("no countdown available: the interval cycle is exhausted")]
    ExhaustedCycle,

    /// Input reached end-of-file while awaiting acknowledgment.
    #[error("input closed while awaiting acknowledgment")]
    AckClosed,

    /// Writing to or reading from the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Session
// ============================================================================

/// The top-level session controller.
pub struct Session<W, P, A, R> {
    intervals: IntervalSource,
    countdown: Countdown<W, P>,
    alarm: A,
    ack: R,
    phase: SessionPhase,
    events: Option<mpsc::UnboundedSender<SessionEvent>>,
}

impl<W, P, A, R> Session<W, P, A, R>
where
    W: Write,
    P: WidthSource,
    A: AlarmPlayer,
    R: AsyncBufRead + Unpin,
{
    /// Creates a session over the given collaborators.
    ///
    /// `ack` is the stream acknowledgments are read from (stdin in
    /// production).
    pub fn new(intervals: IntervalSource, countdown: Countdown<W, P>, alarm: A, ack: R) -> Self {
        Self {
            intervals,
            countdown,
            alarm,
            ack,
            phase: SessionPhase::Stopped,
            events: None,
        }
    }

    /// Attaches an event channel for observing phase transitions.
    #[must_use]
    pub fn with_events(mut self, events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Returns the session's current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the alarm player.
    #[must_use]
    pub fn alarm(&self) -> &A {
        &self.alarm
    }

    /// Runs the session loop until an error occurs.
    ///
    /// The loop itself never completes: the interval source is infinite,
    /// so a normal run only ends through cancellation at the caller
    /// (which then calls [`Session::stop`]).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ExhaustedCycle`] if the interval source
    /// unexpectedly runs out, [`SessionError::AckClosed`] if input closes
    /// at the acknowledgment prompt, or an I/O error from the terminal.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let minutes = self.intervals.next().ok_or(SessionError::ExhaustedCycle)?;

            self.enter(SessionPhase::Counting, SessionEvent::CountingStarted { minutes });
            self.countdown.run(minutes).await?;
            self.emit(SessionEvent::CountingFinished { minutes });

            self.enter(SessionPhase::Alarming, SessionEvent::AlarmStarted);
            self.sound_alarm().await;
            self.emit(SessionEvent::AlarmFinished);

            self.enter(SessionPhase::AwaitingAck, SessionEvent::AwaitingAck);
            self.await_ack().await?;
            self.emit(SessionEvent::Acknowledged);
        }
    }

    /// Enters the terminal `Stopped` state.
    ///
    /// Suppresses the partially rendered line, prints the farewell, and
    /// tears the audio subsystem down.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the farewell fails; the audio teardown
    /// still runs in that case.
    pub fn stop(&mut self) -> Result<(), SessionError> {
        self.enter(SessionPhase::Stopped, SessionEvent::Stopped);
        let farewell = self.countdown.farewell(FAREWELL);
        self.alarm.shutdown();
        farewell?;
        Ok(())
    }

    /// Plays the alarm to completion, degrading to silence on failure.
    async fn sound_alarm(&mut self) {
        match self.alarm.play() {
            Ok(completion) => match completion.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!("alarm playback failed: {}", e),
                Err(_) => warn!("audio thread dropped the alarm completion"),
            },
            Err(e) => warn!("could not request alarm playback: {}", e),
        }
    }

    /// Blocks until the user sends a line (any input followed by return).
    async fn await_ack(&mut self) -> Result<(), SessionError> {
        self.countdown.prompt(ACK_PROMPT)?;

        let mut line = String::new();
        let read = self.ack.read_line(&mut line).await?;
        if read == 0 {
            return Err(SessionError::AckClosed);
        }
        Ok(())
    }

    fn enter(&mut self, phase: SessionPhase, event: SessionEvent) {
        self.phase = phase;
        debug!(phase = phase.as_str(), "session phase");
        self.emit(event);
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
