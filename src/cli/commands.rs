//! Command-line definitions for the interval timer.
//!
//! Uses clap derive macro for argument parsing.
//!
//! The countdown list is parsed as a plain list of positive minute counts;
//! turning it into an infinite cycle is the interval source's job, not the
//! parser's.

use std::path::PathBuf;

use clap::Parser;

// ============================================================================
// CLI Structure
// ============================================================================

/// Terminal interval timer with a live countdown and an audible alarm
#[derive(Parser, Debug)]
#[command(
    name = "tomatick",
    version,
    about = "Terminal interval timer (25/5 pomodoro cycle by default)",
    long_about = "Counts down each configured duration in turn, forever.\n\
                  When an interval elapses an alarm sound plays, then the timer\n\
                  waits for return before starting the next interval."
)]
pub struct Cli {
    /// Cycle through countdowns of this many minutes (default: 25 5)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub countdowns: Vec<u32>,

    /// Path to the alarm sound (defaults to the bundled sound)
    #[arg(long)]
    pub sound_path: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["tomatick"]);
        assert!(cli.countdowns.is_empty());
        assert!(cli.sound_path.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_countdowns() {
        let cli = Cli::parse_from(["tomatick", "25", "5"]);
        assert_eq!(cli.countdowns, vec![25, 5]);
    }

    #[test]
    fn test_parse_single_countdown() {
        let cli = Cli::parse_from(["tomatick", "45"]);
        assert_eq!(cli.countdowns, vec![45]);
    }

    #[test]
    fn test_parse_sound_path() {
        let cli = Cli::parse_from(["tomatick", "--sound-path", "/tmp/bell.wav"]);
        assert_eq!(cli.sound_path, Some(PathBuf::from("/tmp/bell.wav")));
    }

    #[test]
    fn test_parse_countdowns_and_sound_path() {
        let cli = Cli::parse_from(["tomatick", "50", "10", "--sound-path", "bell.wav"]);
        assert_eq!(cli.countdowns, vec![50, 10]);
        assert_eq!(cli.sound_path, Some(PathBuf::from("bell.wav")));
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::parse_from(["tomatick", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_zero_countdown_rejected() {
        let result = Cli::try_parse_from(["tomatick", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_negative_countdown_rejected() {
        let result = Cli::try_parse_from(["tomatick", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_non_numeric_countdown_rejected() {
        let result = Cli::try_parse_from(["tomatick", "abc"]);
        assert!(result.is_err());
    }
}
