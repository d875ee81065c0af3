//! Core domain types for Nim.

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Human,
    /// The computer player.
    Computer,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended; the seat is the winner.
    ///
    /// Whoever grabs the last stone loses, so the winner is always the
    /// opponent of the seat that emptied the pile.
    Won(Seat),
}
