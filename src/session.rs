//! Game orchestration between the human and the computer.

use crate::game::{Game, GameStatus, Seat};
use crate::players::Player;
use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Default pause between turns so the game reads at a human pace.
///
/// Cosmetic only; game logic never observes it.
pub const TURN_DELAY: Duration = Duration::from_millis(500);

/// Orchestrates one game between a human and a computer player.
pub struct Session {
    game: Game,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    pacing: Duration,
}

impl Session {
    /// Creates a new session over a pile of `stones` with `first` to move.
    pub fn new(
        stones: u32,
        first: Seat,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        pacing: Duration,
    ) -> Self {
        Self {
            game: Game::new(stones, first),
            human,
            computer,
            pacing,
        }
    }

    /// Returns the game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the pile is empty, returning the winner.
    ///
    /// Turns strictly alternate from the game's first mover. After each
    /// turn the status is checked; while the game continues, the pacing
    /// delay runs before the next turn.
    pub async fn run(&mut self) -> Result<Seat> {
        info!(
            stones = self.game.stones(),
            first = ?self.game.to_move(),
            "Starting game session"
        );
        println!("The current stone pile is: {}", self.game.stones());

        loop {
            self.take_turn().await?;

            if let GameStatus::Won(winner) = self.game.status() {
                info!(winner = ?winner, "Game over");
                return Ok(winner);
            }

            sleep(self.pacing).await;
        }
    }

    /// Plays one turn: announces the seat, applies its move, reports the pile.
    async fn take_turn(&mut self) -> Result<()> {
        let player = match self.game.to_move() {
            Seat::Human => {
                println!("Your turn!");
                &mut self.human
            }
            Seat::Computer => {
                println!("Computer's turn!");
                &mut self.computer
            }
        };

        debug!(player = %player.name(), "Waiting for move");
        let grab = player.get_move(self.game.stones()).await?;

        self.game.apply(grab);
        println!("Stones left: {}", self.game.stones());

        Ok(())
    }
}
