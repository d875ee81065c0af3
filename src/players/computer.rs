//! Computer player driven by the arithmetic strategy.

use super::Player;
use crate::game::{is_losing_position, optimal_grab};
use anyhow::Result;
use tracing::debug;

/// Computer player that always plays the closed-form move.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, stones: u32) -> Result<u32> {
        let grab = optimal_grab(stones);
        debug!(
            player = %self.name,
            stones,
            grab,
            cornered = is_losing_position(stones),
            "Computer chose move"
        );
        Ok(grab)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
