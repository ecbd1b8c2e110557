use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordcut_engine::config::Config;
use wordcut_engine::{Dictionary, GameSession};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordcut_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let dictionary = Dictionary::load(&config.game.dictionary_path).with_context(|| {
        format!(
            "failed to load word list from {}",
            config.game.dictionary_path
        )
    })?;
    let dictionary = Arc::new(dictionary);

    let mut rng = rand::rng();
    let mut session = GameSession::new(dictionary);
    session
        .new_game(&mut rng)
        .context("could not pick a start word")?;

    println!("WordCut — remove 1 to 3 letters per move; the remaining");
    println!("letters, in any order, must form another word.");
    println!("Reach 3 letters or fewer to win. Commands: !new !reset !quit");

    let stdin = io::stdin();
    loop {
        if session.is_won() {
            println!(
                "\nWon with {} in {} moves! Final score: {} pts",
                session.current_word(),
                session.history().len(),
                session.total_score()
            );
            println!("!new for another word, !quit to leave.");
        } else {
            println!(
                "\nCurrent word: {} ({} letters) — score {} pts",
                session.current_word(),
                session.current_word().chars().count(),
                session.total_score()
            );
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "!quit" => break,
            "!new" => session
                .new_game(&mut rng)
                .context("could not pick a start word")?,
            "!reset" => session.reset_game(),
            "" => continue,
            _ if session.is_won() => {
                println!("Game over — !new to start another game.")
            }
            word => {
                let result = session.submit_move(word);
                if result.valid {
                    println!(
                        "Accepted: +{} pts (letters removed) +{} pts (reordering)",
                        result.points_p1, result.points_p2
                    );
                } else if let Some(reason) = &result.reason {
                    println!("{}", reason);
                }
            }
        }
    }

    Ok(())
}
