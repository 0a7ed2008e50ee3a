//! CLI Snap example.
//!
//! Press Enter to draw, `n` for a new deck, `q` to quit. Set `RUST_LOG=debug`
//! to see deck client events. With the `http` feature, pass `--remote` to
//! draw from the public deck of cards API instead of a local deck.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use snaprs::{DeckClient, DrawOutcome, GameState, LocalDeckClient, SnapGame, SnapOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("SNAP! CLI example (Enter to draw, 'n' for a new deck, 'q' to quit)");

    let game = SnapGame::new(deck_client(), SnapOptions::default());
    if let Err(err) = game.shuffle_new_deck() {
        println!("Uh-oh! Something's gone wrong... Error initializing and shuffling the deck: {err}");
        return;
    }
    print_status(&game);

    loop {
        match prompt_line("> ").as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "n" | "new" => match game.shuffle_new_deck() {
                Ok(deck) => {
                    println!("New deck {} shuffled.", deck.deck_id);
                    print_status(&game);
                }
                Err(err) => println!("Shuffle error: {err}"),
            },
            _ => {
                if game.state() == GameState::Finished {
                    println!("The deck is empty. Type 'n' for a new deck.");
                    continue;
                }
                match game.draw() {
                    Ok(outcome) => {
                        print_draw(&outcome);
                        print_status(&game);
                    }
                    Err(err) => println!(
                        "Uh-oh! Something's gone wrong... We're having trouble dealing your cards: {err}"
                    ),
                }
            }
        }
    }
}

fn deck_client() -> Box<dyn DeckClient> {
    #[cfg(feature = "http")]
    let remote: Option<Box<dyn DeckClient>> = std::env::args()
        .any(|arg| arg == "--remote")
        .then(|| Box::new(snaprs::HttpDeckClient::default()) as Box<dyn DeckClient>);
    #[cfg(not(feature = "http"))]
    let remote: Option<Box<dyn DeckClient>> = None;

    remote.unwrap_or_else(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Box::new(LocalDeckClient::new(seed))
    })
}

fn print_draw(outcome: &DrawOutcome) {
    let previous = outcome
        .previous
        .as_ref()
        .map_or_else(|| "[card back]".to_string(), ToString::to_string);
    println!("\n{previous:>24}    {}", outcome.card);
    if let Some(label) = outcome.match_kind.snap_label() {
        println!("{:^52}", label.to_uppercase());
    }
}

fn print_status(game: &SnapGame<Box<dyn DeckClient>>) {
    if let Some(summary) = game.summary() {
        println!("\n{summary}");
        return;
    }

    println!("{} Cards remaining", game.remaining_cards());
    if let Some(label) = game.probability_label() {
        println!("Total Match Probability: {label}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}
