//! Command-line interface for strictly_nim.

use clap::Parser;
use strictly_nim::TURN_DELAY;

/// Strictly Nim - console Nim against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_nim")]
#[command(about = "Console game of Nim against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pause between turns, in milliseconds (0 disables pacing)
    #[arg(long, default_value_t = TURN_DELAY.as_millis() as u64)]
    pub delay_ms: u64,
}
