//! Level progression and the fixed-answer puzzles
//!
//! [`LevelService`] is the per-process context object: it owns level progress,
//! the logic-gate and access-pattern puzzles, and the word-game session store.

mod access_patterns;
mod logic_gates;
mod progress;
mod service;

pub use access_patterns::{AccessPatternResult, AccessPatterns};
pub use logic_gates::{Circuit, LogicGateResult, LogicGates};
pub use progress::{
    ACCESS_PATTERN_LEVEL, LOGIC_GATE_LEVEL, Progress, TOTAL_LEVELS, WORD_GAME_LEVEL,
};
pub use service::{LevelService, SolutionOutcome, WordGuessResult};
