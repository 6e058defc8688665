//! Countdown loop: the busy-poll render loop for one interval.
//!
//! Runs for a given number of minutes, redrawing the centered countdown
//! line every tick and polling the terminal width for changes. The clock is
//! monotonic ([`tokio::time::Instant`]), so wall-clock adjustments never
//! shorten or lengthen an interval.

use std::io::{self, Write};

use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

use crate::render::{self, WidthSource};

/// Sleep between render ticks. This is a polling cadence, not an
/// event-driven wake: no cross-platform resize notification exists.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// Elapsed-time decomposition
// ============================================================================

/// Splits elapsed seconds into displayable `(minutes, seconds)`.
///
/// Minutes are reduced modulo 60: the hour component is discarded, so an
/// interval longer than 59 minutes displays its minutes wrapped. Known
/// boundary behavior, kept from the original display format.
#[must_use]
pub fn minutes_seconds_elapsed(elapsed_seconds: u64) -> (u64, u64) {
    let seconds = elapsed_seconds % 60;
    let minutes = (elapsed_seconds / 60) % 60;
    (minutes, seconds)
}

// ============================================================================
// Countdown
// ============================================================================

/// The per-interval countdown loop.
///
/// Owns the output stream and the last observed terminal width; a width
/// change between ticks triggers a screen clear around the redraw.
#[derive(Debug)]
pub struct Countdown<W, P> {
    out: W,
    widths: P,
    width: u16,
}

impl<W: Write, P: WidthSource> Countdown<W, P> {
    /// Creates a countdown writing to `out`, observing widths from `widths`.
    pub fn new(out: W, widths: P) -> Self {
        let width = widths.columns();
        Self { out, widths, width }
    }

    /// Returns the last observed terminal width.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Counts down `total_minutes` minutes, redrawing every tick.
    ///
    /// Returns once the elapsed time reaches the target, after emitting a
    /// trailing newline so the finished line stays on screen. A target of
    /// zero minutes completes after a single tick.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output stream fails.
    pub async fn run(&mut self, total_minutes: u32) -> io::Result<()> {
        let upper_limit = u64::from(total_minutes) * 60;
        let started = Instant::now();
        debug!(total_minutes, "countdown started");

        loop {
            let elapsed = started.elapsed().as_secs();
            let (minutes, seconds) = minutes_seconds_elapsed(elapsed);

            let current = self.widths.columns();
            let width_changed = current != self.width;
            self.width = current;

            // On a resize, clear both before this frame and again after the
            // sleep: a single clear can leave pre-resize line remnants on
            // screen depending on when the terminal redraws.
            // TODO: revisit once resize handling is event-driven; the second
            // clear exists only to beat terminal redraw timing.
            if width_changed {
                render::clear_screen(&mut self.out)?;
            }

            render::draw_frame(&mut self.out, minutes, seconds, total_minutes, self.width)?;

            sleep(REFRESH_INTERVAL).await;

            if width_changed {
                render::clear_screen(&mut self.out)?;
            }

            if elapsed >= upper_limit {
                writeln!(self.out)?;
                self.out.flush()?;
                break;
            }
        }

        debug!(total_minutes, "countdown finished");
        Ok(())
    }

    /// Writes a centered prompt without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output stream fails.
    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "{}", render::center(message, self.width))?;
        self.out.flush()
    }

    /// Suppresses the current line and writes a centered parting message.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output stream fails.
    pub fn farewell(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "\r\n")?;
        writeln!(self.out, "{}", render::center(message, self.width))?;
        self.out.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FixedWidth;

    // ------------------------------------------------------------------------
    // minutes_seconds_elapsed Tests
    // ------------------------------------------------------------------------

    mod elapsed_tests {
        use super::*;

        #[test]
        fn test_zero() {
            assert_eq!(minutes_seconds_elapsed(0), (0, 0));
        }

        #[test]
        fn test_last_second_of_first_minute() {
            assert_eq!(minutes_seconds_elapsed(59), (0, 59));
        }

        #[test]
        fn test_exactly_one_minute() {
            assert_eq!(minutes_seconds_elapsed(60), (1, 0));
        }

        #[test]
        fn test_last_second_of_hour() {
            assert_eq!(minutes_seconds_elapsed(3599), (59, 59));
        }

        #[test]
        fn test_hour_wraps_to_zero() {
            // The hour component is discarded by design.
            assert_eq!(minutes_seconds_elapsed(3600), (0, 0));
        }

        #[test]
        fn test_past_the_hour() {
            assert_eq!(minutes_seconds_elapsed(3600 + 125), (2, 5));
        }
    }

    // ------------------------------------------------------------------------
    // Countdown Loop Tests (virtual time)
    // ------------------------------------------------------------------------

    mod loop_tests {
        use super::*;

        /// Width source that yields a scripted sequence of widths, repeating
        /// the last one forever.
        struct ScriptedWidth(std::cell::RefCell<Vec<u16>>);

        impl ScriptedWidth {
            fn new(widths: &[u16]) -> Self {
                Self(std::cell::RefCell::new(widths.to_vec()))
            }
        }

        impl WidthSource for ScriptedWidth {
            fn columns(&self) -> u16 {
                let mut widths = self.0.borrow_mut();
                if widths.len() > 1 {
                    widths.remove(0)
                } else {
                    widths[0]
                }
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_zero_minutes_completes_after_one_tick() {
            let mut countdown = Countdown::new(Vec::new(), FixedWidth(20));

            let started = Instant::now();
            countdown.run(0).await.unwrap();
            let took = started.elapsed();

            // One frame, one refresh interval, then the trailing newline.
            assert!(took <= REFRESH_INTERVAL + Duration::from_millis(5));

            let text = String::from_utf8(countdown.out).unwrap();
            assert!(text.contains("00:00 / 00:00"));
            assert!(text.ends_with('\n'));
        }

        #[tokio::test(start_paused = true)]
        async fn test_one_minute_never_undercounts() {
            let mut countdown = Countdown::new(Vec::new(), FixedWidth(40));

            let started = Instant::now();
            countdown.run(1).await.unwrap();
            let took = started.elapsed();

            assert!(took >= Duration::from_secs(60), "undercounted: {:?}", took);
            assert!(took <= Duration::from_secs(60) + REFRESH_INTERVAL);

            // One frame per tick: 0.0s through 60.0s inclusive at 50 ms.
            let text = String::from_utf8(countdown.out).unwrap();
            let frames = text.matches('\r').count();
            assert!((1200..=1202).contains(&frames), "frames = {}", frames);
            assert!(text.contains("01:00 / 01:00"));
        }

        #[tokio::test(start_paused = true)]
        async fn test_width_change_clears_before_and_after_draw() {
            // Construction observes 30; the first run tick observes 40.
            let widths = ScriptedWidth::new(&[30, 40]);
            let mut countdown = Countdown::new(Vec::new(), widths);
            assert_eq!(countdown.width(), 30);

            countdown.run(0).await.unwrap();
            assert_eq!(countdown.width(), 40);

            let text = String::from_utf8(countdown.out).unwrap();
            let clears = text.matches("\x1b[2J").count();
            assert_eq!(clears, 2, "expected the double clear around a resize");
            // The frame is centered to the new width.
            assert!(text.contains(&render::center("00:00 / 00:00", 40)));
        }

        #[tokio::test(start_paused = true)]
        async fn test_stable_width_never_clears() {
            let mut countdown = Countdown::new(Vec::new(), FixedWidth(25));
            countdown.run(0).await.unwrap();

            let text = String::from_utf8(countdown.out).unwrap();
            assert!(!text.contains("\x1b[2J"));
        }
    }

    // ------------------------------------------------------------------------
    // Prompt / Farewell Tests
    // ------------------------------------------------------------------------

    mod message_tests {
        use super::*;

        #[test]
        fn test_prompt_is_centered_without_newline() {
            let mut countdown = Countdown::new(Vec::new(), FixedWidth(30));
            countdown.prompt("Press return to reset").unwrap();

            let text = String::from_utf8(countdown.out).unwrap();
            assert_eq!(text, render::center("Press return to reset", 30));
            assert!(!text.contains('\n'));
        }

        #[test]
        fn test_farewell_suppresses_line_and_centers() {
            let mut countdown = Countdown::new(Vec::new(), FixedWidth(20));
            countdown.farewell("Goodbye!").unwrap();

            let text = String::from_utf8(countdown.out).unwrap();
            assert!(text.starts_with("\r\n"));
            assert!(text.contains(&render::center("Goodbye!", 20)));
            assert!(text.ends_with('\n'));
        }
    }
}
