//! Tests for the Nim game engine and strategy.

use strictly_nim::{Game, GameStatus, Seat, optimal_grab};

#[test]
fn test_worked_hard_mode_line() {
    // Computer opens on a pile of 10 and keeps returning the pile to a
    // multiple of four; the human grabs three each turn.
    let mut game = Game::new(10, Seat::Computer);

    assert_eq!(optimal_grab(game.stones()), 2);
    game.apply(2);
    assert_eq!(game.stones(), 8);

    game.apply(3);
    assert_eq!(game.stones(), 5);

    assert_eq!(optimal_grab(game.stones()), 1);
    game.apply(1);
    assert_eq!(game.stones(), 4);

    game.apply(3);
    assert_eq!(game.stones(), 1);

    // The computer is forced to grab the last stone and loses.
    assert_eq!(optimal_grab(game.stones()), 1);
    game.apply(1);
    assert_eq!(game.status(), GameStatus::Won(Seat::Human));
}

#[test]
fn test_forced_last_stone_loses() {
    let mut game = Game::new(1, Seat::Human);
    game.apply(1);
    assert_eq!(game.stones(), 0);
    assert_eq!(game.status(), GameStatus::Won(Seat::Computer));
}

#[test]
fn test_pile_of_four_wins_for_the_human() {
    let mut game = Game::new(4, Seat::Human);
    game.apply(3);
    assert_eq!(game.stones(), 1);
    game.apply(optimal_grab(game.stones()));
    assert_eq!(game.status(), GameStatus::Won(Seat::Human));
}

#[test]
fn test_self_play_terminates_within_the_pile_size() {
    for initial in 1..=100 {
        let mut game = Game::new(initial, Seat::Computer);
        let mut turns = 0;

        while game.status() == GameStatus::InProgress {
            game.apply(optimal_grab(game.stones()));
            turns += 1;
            assert!(turns <= initial, "pile of {initial} did not drain in time");
        }

        assert_eq!(game.stones(), 0);
    }
}

#[test]
fn test_alternation_from_either_first_mover() {
    let mut game = Game::new(9, Seat::Human);
    game.apply(1);
    assert_eq!(game.to_move(), Seat::Computer);
    game.apply(1);
    assert_eq!(game.to_move(), Seat::Human);

    let mut game = Game::new(9, Seat::Computer);
    game.apply(1);
    assert_eq!(game.to_move(), Seat::Human);
}
