//! Nim game logic: the pile, the rules, and the turn state machine.

mod game;
mod pile;
mod rules;
mod types;

pub use game::Game;
pub use pile::Pile;
pub use rules::{
    GrabError, INITIAL_STONES, MAX_GRAB, MIN_GRAB, is_losing_position, optimal_grab, validate_grab,
};
pub use types::{GameStatus, Seat};
