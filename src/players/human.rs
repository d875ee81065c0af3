//! Human player that gets moves from console input.

use super::Player;
use crate::game::validate_grab;
use anyhow::Result;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::debug;

/// Human player fed by lines of console input.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl HumanPlayer {
    /// Creates a new human player reading from the given line channel.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, stones: u32) -> Result<u32> {
        println!("How many stones would you like to grab from the pile of: {stones}");

        loop {
            let line = self
                .input_rx
                .recv()
                .await
                .ok_or_else(|| anyhow::anyhow!("Input channel closed"))?;

            // A line that does not parse as a number gets the same
            // rejection as an out-of-range grab.
            match line.trim().parse::<u32>() {
                Ok(count) => match validate_grab(count, stones) {
                    Ok(count) => return Ok(count),
                    Err(error) => debug!(player = %self.name, %error, "Rejected grab"),
                },
                Err(_) => debug!(player = %self.name, input = %line.trim(), "Rejected non-numeric input"),
            }

            println!("You're a cheater! You can only pick 1-3 stones.");
            print!("Please enter again: ");
            std::io::stdout().flush()?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
