//! DataHunt
//!
//! A small puzzle-game backend: per-level completion tracking, a semantic
//! word-guessing game, a logic-gate ordering puzzle, and an access-pattern
//! classification quiz.
//!
//! # Quick Start
//!
//! ```rust
//! use datahunt::config::GameConfig;
//! use datahunt::levels::LevelService;
//!
//! let service = LevelService::new(&GameConfig::default());
//! let session = service.start_word_game();
//!
//! let result = service.check_guess(&session, "cipher").unwrap();
//! assert_eq!(result.outcome.similarity, 75.0);
//! assert!(!result.outcome.is_successful);
//! ```

// Core domain types
pub mod core;

// Built-in word data
pub mod wordlists;

// Table-and-heuristic scoring
pub mod similarity;

// Word vectors and their sources
pub mod embedding;

// Word-game sessions
pub mod game;

// Level progress and puzzles
pub mod levels;

// Request/response layer
pub mod api;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
