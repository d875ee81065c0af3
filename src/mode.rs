//! Game difficulty selection.

use crate::game::Seat;
use rand::Rng;

/// Game difficulty - who moves first?
///
/// Both difficulties play the same rules with the same computer
/// strategy; they differ only in how the first mover is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
pub enum Difficulty {
    /// First mover chosen at random, then alternating play.
    #[strum(serialize = "e")]
    Easy,
    /// Computer always moves first.
    #[strum(serialize = "h")]
    Hard,
}

impl Difficulty {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    /// Picks the seat that takes the first turn.
    pub fn first_mover<R: Rng + ?Sized>(&self, rng: &mut R) -> Seat {
        match self {
            Difficulty::Easy => {
                if rng.random_bool(0.5) {
                    Seat::Human
                } else {
                    Seat::Computer
                }
            }
            Difficulty::Hard => Seat::Computer,
        }
    }
}
