//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the number of stones to grab from a pile of `stones`.
    async fn get_move(&mut self, stones: u32) -> Result<u32>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
