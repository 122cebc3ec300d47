//! Interactive word-guessing mode

use crate::levels::LevelService;
use crate::output::{print_guess_result, print_history, print_levels};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Quit,
    NewGame,
    Hints,
    History,
    Levels,
    Reveal,
    Guess(String),
    Empty,
}

impl PlayInput {
    /// Interpret a raw input line
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "" => Self::Empty,
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "hints" | "hint" | "words" => Self::Hints,
            "history" | "h" => Self::History,
            "levels" => Self::Levels,
            "reveal" => Self::Reveal,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the interactive guessing loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(service: &LevelService) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 DataHunt - Word Decryption                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret codeword. Each guess is scored 0-100 by closeness;");
    println!(
        "reach {} to crack it.\n",
        format!("{:.0}", service.word_game().threshold()).bright_yellow()
    );
    println!("Commands: 'hints', 'history', 'levels', 'reveal', 'new', 'quit'\n");

    let mut session_id = service.start_word_game();
    let mut turn = 1;

    loop {
        let input = get_user_input(&format!("Guess {turn}"))?;

        match PlayInput::parse(&input) {
            PlayInput::Empty => {}
            PlayInput::Quit => {
                println!("\n👋 Signing off.\n");
                return Ok(());
            }
            PlayInput::NewGame => {
                session_id = service.start_word_game();
                turn = 1;
                println!("\n🔄 New game started!\n");
            }
            PlayInput::Hints => {
                println!("Related words: {}\n", service.valid_words().join(", ").bright_cyan());
            }
            PlayInput::History => {
                let history = service.guesses(&session_id)?;
                print_history(&history);
            }
            PlayInput::Levels => {
                print_levels(&service.completed_levels(), &service.available_levels());
            }
            PlayInput::Reveal => {
                let word = service.reveal_word(&session_id)?;
                println!("The codeword was {}\n", word.to_uppercase().bright_yellow().bold());
            }
            PlayInput::Guess(guess) => {
                let result = service.check_guess(&session_id, &guess)?;
                print_guess_result(&result);

                if result.outcome.is_successful {
                    println!(
                        "\n  Cracked in {} {}\n",
                        turn.to_string().bright_cyan().bold(),
                        if turn == 1 { "guess" } else { "guesses" }
                    );

                    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                        "yes" | "y" => {
                            session_id = service.start_word_game();
                            turn = 1;
                            println!("\n🔄 New game started!\n");
                            continue;
                        }
                        _ => {
                            println!("\n👋 Signing off.\n");
                            return Ok(());
                        }
                    }
                }
                turn += 1;
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
