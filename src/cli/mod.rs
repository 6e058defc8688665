//! CLI layer for the interval timer.

mod commands;

pub use commands::Cli;
