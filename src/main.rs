//! tomatick - terminal interval timer.
//!
//! Counts down a configurable cycle of durations (default 25 then 5
//! minutes, repeating), renders a live centered countdown line, and plays
//! an alarm sound when each interval elapses. Ctrl-C at any point stops
//! the session cleanly.

use anyhow::{Context, Result};
use clap::Parser;

use tomatick::alarm::RodioAlarm;
use tomatick::cli::Cli;
use tomatick::config::TimerConfig;
use tomatick::countdown::Countdown;
use tomatick::intervals::IntervalSource;
use tomatick::render::TerminalWidth;
use tomatick::session::Session;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Builds the session from the CLI arguments and runs it until Ctrl-C.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = TimerConfig::from_cli(&cli)?;
    let intervals = IntervalSource::new(config.cycle)?;
    let alarm = RodioAlarm::spawn(config.sound);
    let countdown = Countdown::new(std::io::stdout(), TerminalWidth);
    let ack = tokio::io::BufReader::new(tokio::io::stdin());

    let mut session = Session::new(intervals, countdown, alarm, ack);

    // Cancellation is caught here, at the top level, and nowhere else:
    // the session loop itself never watches for signals.
    let outcome = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for interrupt signal")?;
            None
        }
        result = session.run() => Some(result),
    };

    match outcome {
        // Interrupted: farewell, audio teardown, normal exit.
        None => session.stop().context("failed to stop the session")?,
        // The session loop only returns on an error.
        Some(result) => result?,
    }

    Ok(())
}
