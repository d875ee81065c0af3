//! Strictly Nim - interactive console game of Nim.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rand::Rng;
use std::time::Duration;
use strictly_nim::{
    ComputerPlayer, Difficulty, HumanPlayer, INITIAL_STONES, Seat, Session,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    println!(
        "This is a game of Nim. A strategy game for two players in which they take turns \
         eliminating things from piles. Pick an amount of stones between 1-3. The person to \
         pick the last stone loses."
    );
    println!("What difficulty level would you like to play? e for Easy or h for Hard?");

    // Pump stdin lines into a channel; the difficulty prompt reads the
    // first line and the human player consumes the rest.
    let (line_tx, mut line_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let Some(choice) = line_rx.recv().await else {
        return Ok(());
    };
    let Ok(difficulty) = choice.trim().parse::<Difficulty>() else {
        // Anything other than a recognized difficulty plays no game.
        debug!(choice = %choice.trim(), "Unrecognized difficulty, exiting");
        return Ok(());
    };

    let mut rng = rand::rng();
    let stones = rng.random_range(INITIAL_STONES);
    let first = difficulty.first_mover(&mut rng);
    info!(difficulty = difficulty.name(), stones, first = ?first, "Starting game");

    let human = Box::new(HumanPlayer::new("You", line_rx));
    let computer = Box::new(ComputerPlayer::new("Computer"));
    let mut session = Session::new(
        stones,
        first,
        human,
        computer,
        Duration::from_millis(cli.delay_ms),
    );

    match session.run().await? {
        Seat::Human => println!("You win!"),
        Seat::Computer => println!("You lose!"),
    }

    Ok(())
}
