//! Display functions for command results

use super::formatters::{heat, heat_label, similarity_bar};
use crate::commands::{CalibrationReport, ScoreResult};
use crate::game::GuessRecord;
use crate::levels::WordGuessResult;
use colored::Colorize;
use std::collections::BTreeSet;

/// Print one scored guess
pub fn print_guess_result(result: &WordGuessResult) {
    let outcome = &result.outcome;
    let bar = similarity_bar(outcome.similarity, 30);

    println!(
        "  {:<16} [{}] {} {}",
        outcome.guess.to_uppercase().bright_white().bold(),
        heat(&bar, outcome.similarity),
        format!("{:6.2}", outcome.similarity).bright_yellow(),
        heat(heat_label(outcome.similarity), outcome.similarity)
    );

    if outcome.is_successful {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!("{}", "    🔓  C O D E W O R D   C R A C K E D  🔓    ".bright_green().bold());
        println!("{}", "═".repeat(60).bright_cyan());
        if result.completed {
            println!("  {}", "Level 3 complete.".bright_white());
        }
    }
}

/// Print a session's guess history, best first
pub fn print_history(history: &[GuessRecord]) {
    if history.is_empty() {
        println!("No guesses yet.\n");
        return;
    }

    let mut ranked: Vec<&GuessRecord> = history.iter().collect();
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    println!("\n{}", "Guess history (best first):".bright_cyan().bold());
    for (i, record) in ranked.iter().enumerate() {
        println!(
            "  {:>3}. {:<16} {}",
            (i + 1).to_string().bright_black(),
            record.word,
            heat(&format!("{:6.2}", record.similarity), record.similarity)
        );
    }
    println!();
}

/// Print completed and available levels
pub fn print_levels(completed: &BTreeSet<u32>, available: &[u32]) {
    println!("  Completed: {}", join_levels(completed).green());
    println!("  Available: {}\n", join_levels(available).bright_yellow());
}

fn join_levels<'a>(levels: impl IntoIterator<Item = &'a u32>) -> String {
    let joined = levels
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() { "none".to_string() } else { joined }
}

/// Print the ladder and embedding scores for a pair
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} / {} ",
        "SIMILARITY:".bright_cyan().bold(),
        result.reference.to_uppercase().bright_yellow().bold(),
        result.candidate.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Ladder:     [{}] {}",
        heat(&similarity_bar(result.score, 30), result.score),
        format!("{:.2}", result.score).bright_yellow()
    );
    println!("   Rule:       {:?}", result.rule);
    println!(
        "   Embedding:  [{}] {}",
        heat(
            &similarity_bar(result.embedding_similarity, 30),
            result.embedding_similarity
        ),
        format!("{:.2}", result.embedding_similarity).bright_yellow()
    );
}

/// Print a calibration report
pub fn print_calibration(report: &CalibrationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ({} source)",
        "CALIBRATION:".bright_cyan().bold(),
        report.anchor.to_uppercase().bright_yellow().bold(),
        report.source
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   {:<16} {:>7} {:>9} {:>7}", "word", "target", "achieved", "error");
    for entry in &report.entries {
        let error = format!("{:7.3}", entry.error());
        println!(
            "   {:<16} {:>7.1} {:>9.3} {}",
            entry.word,
            entry.target,
            entry.achieved,
            if entry.error() < 0.1 { error.green() } else { error.red() }
        );
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words:        {}", report.entries.len());
    println!("   Max error:    {}", format!("{:.4}", report.max_error()).bright_yellow().bold());
    println!("   Mean error:   {:.4}", report.mean_error());
    println!("   Time taken:   {:.2}ms", report.duration.as_secs_f64() * 1000.0);
}
