//! Render surface: the single in-place countdown line.
//!
//! Formats `MM:SS / TT:00` frames, centers them to the live terminal width,
//! and rewrites the current line via a carriage return rather than emitting
//! newlines. Width queries go through the [`WidthSource`] trait so tests can
//! inject widths without a real terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Fallback column count when the terminal width cannot be queried.
pub const DEFAULT_WIDTH: u16 = 80;

// ============================================================================
// WidthSource
// ============================================================================

/// Source of the current terminal column count.
pub trait WidthSource {
    /// Returns the current number of columns.
    fn columns(&self) -> u16;
}

/// Live terminal width via crossterm, falling back to [`DEFAULT_WIDTH`]
/// when the query fails (e.g. output is not a terminal).
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidth;

impl WidthSource for TerminalWidth {
    fn columns(&self) -> u16 {
        crossterm::terminal::size()
            .map(|(columns, _rows)| columns)
            .unwrap_or(DEFAULT_WIDTH)
    }
}

/// Fixed-width source for tests and non-interactive output.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub u16);

impl WidthSource for FixedWidth {
    fn columns(&self) -> u16 {
        self.0
    }
}

// ============================================================================
// Frame formatting
// ============================================================================

/// Formats one countdown frame as `MM:SS / TT:00`.
///
/// `minutes` and `seconds` are the elapsed components (already reduced to
/// their displayable ranges); `total_minutes` is the interval target.
#[must_use]
pub fn format_frame(minutes: u64, seconds: u64, total_minutes: u32) -> String {
    format!("{minutes:02}:{seconds:02} / {total_minutes:02}:00")
}

/// Centers `text` in a field of `width` columns, padding with spaces.
///
/// Text wider than `width` is returned unchanged.
#[must_use]
pub fn center(text: &str, width: u16) -> String {
    format!("{text:^width$}", width = width as usize)
}

// ============================================================================
// Drawing
// ============================================================================

/// Draws one frame over the previously drawn line.
///
/// Writes a carriage return followed by the centered frame, then flushes,
/// so the line is rewritten in place without scrolling.
///
/// # Errors
///
/// Returns an error if writing to the output stream fails.
pub fn draw_frame<W: Write>(
    out: &mut W,
    minutes: u64,
    seconds: u64,
    total_minutes: u32,
    width: u16,
) -> io::Result<()> {
    let frame = format_frame(minutes, seconds, total_minutes);
    write!(out, "\r{}", center(&frame, width))?;
    out.flush()
}

/// Clears the screen and homes the cursor.
///
/// # Errors
///
/// Returns an error if writing the clear sequence fails.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

// ============================================================================
// Tests
// ============================================================================
