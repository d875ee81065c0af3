//! Tests for session orchestration with scripted players.

use std::time::Duration;
use strictly_nim::{ComputerPlayer, HumanPlayer, Player, Seat, Session};
use tokio::sync::mpsc;

/// Builds a human player fed by a fixed script of input lines.
fn scripted_human(lines: &[&str]) -> HumanPlayer {
    let (tx, rx) = mpsc::unbounded_channel();
    for line in lines {
        tx.send((*line).to_string()).expect("receiver alive");
    }
    // Dropping the sender leaves the scripted lines buffered; a player
    // that reads past the script sees a closed channel.
    HumanPlayer::new("You", rx)
}

fn session(stones: u32, first: Seat, script: &[&str]) -> Session {
    Session::new(
        stones,
        first,
        Box::new(scripted_human(script)),
        Box::new(ComputerPlayer::new("Computer")),
        Duration::ZERO,
    )
}

#[tokio::test]
async fn test_hard_mode_pile_of_ten() {
    // Computer opens with 2, the human answers 3 twice, and the computer
    // is forced to take the last stone.
    let mut session = session(10, Seat::Computer, &["3", "3"]);
    let winner = session.run().await.expect("session runs to completion");
    assert_eq!(winner, Seat::Human);
    assert_eq!(session.game().stones(), 0);
}

#[tokio::test]
async fn test_human_first_still_loses_the_computer() {
    // 10 -1-> 9 -1-> 8 -1-> 7 -3-> 4 -1-> 3 -3-> 0: the computer drains
    // every pile it sees down to a multiple of four, ending at zero.
    let mut session = session(10, Seat::Human, &["1", "1", "1"]);
    let winner = session.run().await.expect("session runs to completion");
    assert_eq!(winner, Seat::Human);
}

#[tokio::test]
async fn test_human_grabbing_the_last_stone_loses() {
    let mut session = session(1, Seat::Human, &["1"]);
    let winner = session.run().await.expect("session runs to completion");
    assert_eq!(winner, Seat::Computer);
}

#[tokio::test]
async fn test_rejects_invalid_input_until_a_legal_grab() {
    let mut human = scripted_human(&["7", "0", "four", "", "2"]);
    let grab = human.get_move(10).await.expect("eventually legal");
    assert_eq!(grab, 2);
}

#[tokio::test]
async fn test_grab_bounded_by_the_pile() {
    // 3 is inside the usual range but the pile only holds 2.
    let mut human = scripted_human(&["3", "2"]);
    let grab = human.get_move(2).await.expect("eventually legal");
    assert_eq!(grab, 2);
}

#[tokio::test]
async fn test_exhausted_input_is_an_error() {
    let mut human = scripted_human(&[]);
    assert!(human.get_move(5).await.is_err());
}
