//! Turn-by-turn game engine for Nim.

use super::pile::Pile;
use super::types::{GameStatus, Seat};
use tracing::instrument;

/// Nim game engine.
///
/// Tracks the pile, the seat to move, and whether the game has been
/// decided. Applying a grab either passes the turn or, when it empties
/// the pile, awards the win to the mover's opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pile: Pile,
    to_move: Seat,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with the given pile size and first mover.
    #[instrument]
    pub fn new(stones: u32, first: Seat) -> Self {
        Self {
            pile: Pile::new(stones),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the number of stones remaining in the pile.
    pub fn stones(&self) -> u32 {
        self.pile.stones()
    }

    /// Returns the seat to move next.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies the current seat's grab to the pile.
    ///
    /// Counts arrive already checked: human grabs pass `validate_grab`
    /// before they get here and the strategy formula never overdraws.
    /// The pile saturates regardless, so an inconsistent count shrinks
    /// the pile to empty rather than corrupting it.
    #[instrument(skip(self), fields(seat = ?self.to_move, stones = self.pile.stones()))]
    pub fn apply(&mut self, count: u32) {
        self.pile.remove(count);
        if self.pile.is_empty() {
            self.status = GameStatus::Won(self.to_move.opponent());
        } else {
            self.to_move = self.to_move.opponent();
        }
    }
}
