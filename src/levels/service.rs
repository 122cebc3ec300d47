//! The per-process puzzle context

use super::{
    ACCESS_PATTERN_LEVEL, AccessPatternResult, AccessPatterns, LOGIC_GATE_LEVEL, LogicGateResult,
    LogicGates, Progress, WORD_GAME_LEVEL,
};
use crate::config::GameConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::{GameError, Result};
use crate::game::{GuessOutcome, GuessRecord, WordGameStore};
use crate::similarity::{SimilarityScorer, SimilarityTable};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// Result of a generic solution submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionOutcome {
    /// The level is completed; `next_level` is `None` after the last level
    Solved { next_level: Option<u32> },
    /// Not accepted
    Rejected,
}

/// A scored guess plus the word-game level's completion state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordGuessResult {
    #[serde(flatten)]
    pub outcome: GuessOutcome,
    pub completed: bool,
}

#[derive(Debug, Default)]
struct PuzzleState {
    progress: Progress,
    logic_gates: LogicGates,
    access_patterns: AccessPatterns,
}

/// Level progress, puzzles, and word-game sessions for one process
///
/// Construct one per serving context and share it by reference. Level state and
/// the session map sit behind separate locks and no method holds both at once.
///
/// # Examples
/// ```
/// use datahunt::config::GameConfig;
/// use datahunt::levels::{LevelService, SolutionOutcome};
///
/// let service = LevelService::new(&GameConfig::default());
/// assert_eq!(service.available_levels(), vec![1]);
///
/// let outcome = service.submit_solution(1, false).unwrap();
/// assert_eq!(outcome, SolutionOutcome::Solved { next_level: Some(2) });
/// assert!(service.is_available(2));
/// ```
pub struct LevelService {
    state: Mutex<PuzzleState>,
    word_game: WordGameStore,
}

impl LevelService {
    /// Build a service over the built-in similarity table
    ///
    /// Every table word is embedded before this returns.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_table(config, SimilarityTable::builtin())
    }

    /// Build a service over a custom similarity table
    #[must_use]
    pub fn with_table(config: &GameConfig, table: SimilarityTable) -> Self {
        let table = Arc::new(table);
        let embeddings = Arc::new(EmbeddingProvider::from_config(&config.embedding, &table));
        embeddings.warm(table.words());

        info!(
            source = embeddings.source_name(),
            words = table.len(),
            threshold = config.similarity_threshold,
            "level service ready"
        );

        let scorer = SimilarityScorer::new(table);
        Self::from_parts(WordGameStore::new(scorer, embeddings, config.similarity_threshold))
    }

    /// Wrap an existing word-game store with fresh level state
    #[must_use]
    pub fn from_parts(word_game: WordGameStore) -> Self {
        Self {
            state: Mutex::new(PuzzleState::default()),
            word_game,
        }
    }

    /// The word-game session store
    #[must_use]
    pub fn word_game(&self) -> &WordGameStore {
        &self.word_game
    }

    #[must_use]
    pub fn total_levels(&self) -> u32 {
        self.state.lock().progress.total()
    }

    #[must_use]
    pub fn is_available(&self, level_id: u32) -> bool {
        self.state.lock().progress.is_available(level_id)
    }

    #[must_use]
    pub fn available_levels(&self) -> Vec<u32> {
        self.state.lock().progress.available_levels()
    }

    /// Snapshot of the completed set
    #[must_use]
    pub fn completed_levels(&self) -> BTreeSet<u32> {
        self.state.lock().progress.completed_levels().clone()
    }

    #[must_use]
    pub fn is_completed(&self, level_id: u32) -> bool {
        self.state.lock().progress.is_completed(level_id)
    }

    /// Generic level check, without availability gating
    pub fn check_solution(&self, level_id: u32, dev_mode: bool) -> bool {
        self.state.lock().progress.check_solution(level_id, dev_mode)
    }

    /// Mark a level completed; returns whether it was newly completed
    pub fn complete_level(&self, level_id: u32) -> bool {
        let newly = self.state.lock().progress.complete(level_id);
        if newly {
            info!(level_id, "level completed");
        }
        newly
    }

    /// Gated solution submission
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LevelLocked`] if the level is not available and
    /// `dev_mode` is off.
    pub fn submit_solution(&self, level_id: u32, dev_mode: bool) -> Result<SolutionOutcome> {
        let mut state = self.state.lock();
        if !dev_mode && !state.progress.is_available(level_id) {
            return Err(GameError::LevelLocked(level_id));
        }

        let was_completed = state.progress.is_completed(level_id);
        if !state.progress.check_solution(level_id, dev_mode) {
            return Ok(SolutionOutcome::Rejected);
        }
        if !was_completed {
            info!(level_id, dev_mode, "level completed");
        }

        Ok(SolutionOutcome::Solved {
            next_level: state.progress.next_level(level_id),
        })
    }

    /// Start a word-game session
    pub fn start_word_game(&self) -> String {
        self.word_game.start_game()
    }

    /// Score a guess; a successful one completes the word-game level
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if `session_id` is unknown.
    pub fn check_guess(&self, session_id: &str, guess: &str) -> Result<WordGuessResult> {
        let outcome = self.word_game.check_guess(session_id, guess)?;

        let mut state = self.state.lock();
        if outcome.is_successful && state.progress.complete(WORD_GAME_LEVEL) {
            info!(session_id, "word game solved");
        }

        Ok(WordGuessResult {
            outcome,
            completed: state.progress.is_completed(WORD_GAME_LEVEL),
        })
    }

    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if `session_id` is unknown.
    pub fn reveal_word(&self, session_id: &str) -> Result<String> {
        self.word_game.reveal_word(session_id)
    }

    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if `session_id` is unknown.
    pub fn guesses(&self, session_id: &str) -> Result<Vec<GuessRecord>> {
        self.word_game.guesses(session_id)
    }

    #[must_use]
    pub fn valid_words(&self) -> &'static [&'static str] {
        self.word_game.valid_words()
    }

    /// Check one circuit; the level completes once every circuit is solved
    pub fn check_logic_gates(&self, sequence: &[String], circuit_id: &str) -> LogicGateResult {
        let mut state = self.state.lock();
        let correct = state.logic_gates.check(circuit_id, sequence);
        let all_circuits_solved = state.logic_gates.all_solved();

        if all_circuits_solved && state.progress.complete(LOGIC_GATE_LEVEL) {
            info!("all circuits solved");
        }

        LogicGateResult {
            correct,
            completed: state.progress.is_completed(LOGIC_GATE_LEVEL),
            all_circuits_solved,
            circuits_solved: state.logic_gates.solved_ids(),
        }
    }

    /// Clear every circuit and un-complete the logic-gate level
    pub fn reset_logic_gates(&self) {
        let mut state = self.state.lock();
        state.logic_gates.reset();
        state.progress.uncomplete(LOGIC_GATE_LEVEL);
    }

    /// Check the access-pattern classifications
    pub fn check_access_patterns(&self, answers: &[String]) -> AccessPatternResult {
        let mut state = self.state.lock();
        let correct = state.access_patterns.check(answers);

        if correct && state.progress.complete(ACCESS_PATTERN_LEVEL) {
            info!("access patterns classified");
        }

        AccessPatternResult {
            correct,
            completed: state.progress.is_completed(ACCESS_PATTERN_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LevelService {
        LevelService::new(&GameConfig::default())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| s.to_string()).collect()
    }

    #[test]
    fn fresh_service_has_level_one() {
        let s = service();
        assert_eq!(s.available_levels(), vec![1]);
        assert!(s.completed_levels().is_empty());
        assert_eq!(s.total_levels(), 5);
    }

    #[test]
    fn construction_warms_embeddings() {
        let s = service();
        let provider = s.word_game().embeddings();
        assert_eq!(provider.cache_len(), SimilarityTable::builtin().len());
    }

    #[test]
    fn submit_unlocks_next_level() {
        let s = service();
        assert_eq!(
            s.submit_solution(1, false),
            Ok(SolutionOutcome::Solved { next_level: Some(2) })
        );
        assert!(s.is_available(2));
        assert_eq!(s.available_levels(), vec![1, 2, 3]);
    }

    #[test]
    fn submit_locked_level_is_forbidden() {
        let s = service();
        assert_eq!(s.submit_solution(2, false), Err(GameError::LevelLocked(2)));
        assert_eq!(s.submit_solution(9, false), Err(GameError::LevelLocked(9)));
        assert!(s.completed_levels().is_empty());
    }

    #[test]
    fn dev_mode_bypasses_gating() {
        let s = service();
        assert_eq!(
            s.submit_solution(4, true),
            Ok(SolutionOutcome::Solved { next_level: Some(5) })
        );
        assert_eq!(
            s.submit_solution(5, true),
            Ok(SolutionOutcome::Solved { next_level: None })
        );
    }

    #[test]
    fn checker_levels_reject_generic_submission() {
        let s = service();
        s.complete_level(2);
        assert_eq!(s.submit_solution(3, false), Ok(SolutionOutcome::Rejected));
        assert!(!s.is_completed(3));
    }

    #[test]
    fn winning_guess_completes_word_level() {
        let s = service();
        let id = s.start_word_game();

        let miss = s.check_guess(&id, "spy").unwrap();
        assert!(!miss.outcome.is_successful);
        assert!(!miss.completed);

        let hit = s.check_guess(&id, "espionage").unwrap();
        assert!(hit.outcome.is_successful);
        assert!(hit.completed);
        assert!(s.is_completed(WORD_GAME_LEVEL));
    }

    #[test]
    fn guess_on_unknown_session() {
        let s = service();
        assert_eq!(
            s.check_guess("missing", "spy"),
            Err(GameError::SessionNotFound("missing".to_string()))
        );
    }

    #[test]
    fn one_circuit_does_not_complete_level() {
        let s = service();
        let result = s.check_logic_gates(&strings(&["NOT", "AND", "OR"]), "circuit1");

        assert!(result.correct);
        assert!(!result.completed);
        assert!(!result.all_circuits_solved);
        assert_eq!(result.circuits_solved, vec!["circuit1"]);
        assert!(!s.is_completed(LOGIC_GATE_LEVEL));
    }

    #[test]
    fn both_circuits_complete_level() {
        let s = service();
        s.check_logic_gates(&strings(&["NOT", "AND", "OR"]), "circuit1");
        let result = s.check_logic_gates(&strings(&["NAND", "OR", "NOR"]), "circuit2");

        assert!(result.correct);
        assert!(result.completed);
        assert!(result.all_circuits_solved);
        assert!(s.is_completed(LOGIC_GATE_LEVEL));
    }

    #[test]
    fn wrong_sequence_after_completion_reports_level_state() {
        let s = service();
        s.check_logic_gates(&strings(&["NOT", "AND", "OR"]), "circuit1");
        s.check_logic_gates(&strings(&["NAND", "OR", "NOR"]), "circuit2");

        let result = s.check_logic_gates(&strings(&["OR"]), "circuit1");
        assert!(!result.correct);
        assert!(result.completed);
    }

    #[test]
    fn reset_is_idempotent() {
        let s = service();
        s.check_logic_gates(&strings(&["NOT", "AND", "OR"]), "circuit1");
        s.check_logic_gates(&strings(&["NAND", "OR", "NOR"]), "circuit2");

        s.reset_logic_gates();
        let once = (s.completed_levels(), s.check_logic_gates(&[], "circuit9"));
        s.reset_logic_gates();
        let twice = (s.completed_levels(), s.check_logic_gates(&[], "circuit9"));

        assert_eq!(once, twice);
        assert!(!s.is_completed(LOGIC_GATE_LEVEL));
        assert!(twice.1.circuits_solved.is_empty());
    }

    #[test]
    fn access_patterns_complete_level_five() {
        let s = service();
        let wrong = s.check_access_patterns(&strings(&["Authorized"]));
        assert_eq!(wrong, AccessPatternResult { correct: false, completed: false });

        let right = s.check_access_patterns(&strings(&[
            "Unauthorized",
            "Unauthorized",
            "Authorized",
            "Unauthorized",
        ]));
        assert_eq!(right, AccessPatternResult { correct: true, completed: true });
        assert!(s.is_completed(ACCESS_PATTERN_LEVEL));
    }

    #[test]
    fn wrong_patterns_after_completion_report_level_state() {
        let s = service();
        s.check_access_patterns(&strings(&[
            "Unauthorized",
            "Unauthorized",
            "Authorized",
            "Unauthorized",
        ]));

        let wrong = s.check_access_patterns(&strings(&["Authorized"]));
        assert_eq!(wrong, AccessPatternResult { correct: false, completed: true });
        assert!(s.is_completed(ACCESS_PATTERN_LEVEL));
    }

    #[test]
    fn services_are_isolated() {
        let a = service();
        let b = service();
        a.complete_level(1);
        assert!(b.completed_levels().is_empty());
    }
}
