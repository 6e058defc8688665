//! Terminal interval timer library.
//!
//! This library provides the core functionality for the tomatick CLI:
//! - Interval source cycling through configured countdown durations
//! - Render surface for the in-place centered countdown line
//! - Countdown loop with terminal-resize handling
//! - Alarm playback on a dedicated audio thread
//! - Session controller driving the counting/alarming/acknowledgment cycle

pub mod alarm;
pub mod cli;
pub mod config;
pub mod countdown;
pub mod intervals;
pub mod render;
pub mod session;

// Re-export commonly used types for convenience
pub use alarm::{AlarmError, AlarmPlayer, AlarmSource, MockAlarm, RodioAlarm};
pub use cli::Cli;
pub use config::{ConfigError, TimerConfig, DEFAULT_CYCLE};
pub use countdown::{minutes_seconds_elapsed, Countdown, REFRESH_INTERVAL};
pub use intervals::IntervalSource;
pub use render::{FixedWidth, TerminalWidth, WidthSource, DEFAULT_WIDTH};
pub use session::{Session, SessionError, SessionEvent, SessionPhase};
