//! Grab rules and the computer's arithmetic strategy.

use std::ops::RangeInclusive;

/// Fewest stones a grab may take.
pub const MIN_GRAB: u32 = 1;

/// Most stones a grab may take.
pub const MAX_GRAB: u32 = 3;

/// Range the initial pile size is drawn from.
pub const INITIAL_STONES: RangeInclusive<u32> = 10..=20;

/// Error raised when a requested grab breaks the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GrabError {
    /// The count is outside the 1-3 range.
    #[display("Cannot grab {_0} stones, grabs must take 1-3")]
    OutOfRange(u32),

    /// The count exceeds the stones remaining in the pile.
    #[display("Cannot grab {count} stones from a pile of {stones}")]
    ExceedsPile {
        /// Stones requested.
        count: u32,
        /// Stones remaining in the pile.
        stones: u32,
    },
}

impl std::error::Error for GrabError {}

/// Checks a requested grab against the rules and the current pile.
///
/// This is the rule the human player's prompt loop enforces: the count
/// must lie in 1-3 and must not exceed the pile.
///
/// # Errors
///
/// Returns [`GrabError::OutOfRange`] or [`GrabError::ExceedsPile`] when
/// the corresponding bound is broken.
pub fn validate_grab(count: u32, stones: u32) -> Result<u32, GrabError> {
    if !(MIN_GRAB..=MAX_GRAB).contains(&count) {
        return Err(GrabError::OutOfRange(count));
    }
    if count > stones {
        return Err(GrabError::ExceedsPile { count, stones });
    }
    Ok(count)
}

/// Computes the computer's grab for the given pile size.
///
/// The closed-form move `((stones - 1) % 4) + 1` always leaves the
/// opponent a multiple of four stones. It never exceeds the pile, though
/// it does ask for four stones whenever the pile itself is a multiple of
/// four. Callers only consult the strategy while stones remain.
pub fn optimal_grab(stones: u32) -> u32 {
    stones.saturating_sub(1) % 4 + 1
}

/// Returns true when the pile is a losing position for the seat to move.
///
/// With 1-3 stones per grab and the last stone losing, a pile of
/// `4k + 1` stones loses for the seat about to move against optimal
/// opposition.
pub fn is_losing_position(stones: u32) -> bool {
    stones % 4 == 1
}
