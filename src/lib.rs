//! Strictly Nim - console game of Nim against the computer.
//!
//! Two players alternately grab 1-3 stones from a shared pile; whoever
//! grabs the last stone loses.
//!
//! # Architecture
//!
//! - **Game**: pure Nim logic - the pile, the grab rules, the computer's
//!   closed-form strategy, and the turn state machine
//! - **Players**: the [`Player`] trait with a console-fed human and a
//!   formula-driven computer
//! - **Session**: the turn loop - announce, move, apply, report, pace
//! - **Difficulty**: Easy (random first mover) or Hard (computer first)
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use strictly_nim::{ComputerPlayer, HumanPlayer, Seat, Session};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (line_tx, line_rx) = mpsc::unbounded_channel();
//! line_tx.send("3".to_string())?;
//! line_tx.send("3".to_string())?;
//!
//! let human = Box::new(HumanPlayer::new("You", line_rx));
//! let computer = Box::new(ComputerPlayer::new("Computer"));
//!
//! // Computer opens on 10 and the scripted human answers 3 twice.
//! let mut session = Session::new(10, Seat::Computer, human, computer, Duration::ZERO);
//! let winner = session.run().await?;
//! assert_eq!(winner, Seat::Human);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod mode;
mod players;
mod session;

// Crate-level exports - game logic
pub use game::{
    Game, GameStatus, GrabError, INITIAL_STONES, MAX_GRAB, MIN_GRAB, Pile, Seat,
    is_losing_position, optimal_grab, validate_grab,
};

// Crate-level exports - players
pub use players::{ComputerPlayer, HumanPlayer, Player};

// Crate-level exports - session orchestration
pub use session::{Session, TURN_DELAY};

// Crate-level exports - difficulty selection
pub use mode::Difficulty;
