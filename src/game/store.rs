//! Session store for the word-guessing game

use super::{GameSession, GuessOutcome, GuessRecord};
use crate::core::Word;
use crate::embedding::EmbeddingProvider;
use crate::error::{GameError, Result};
use crate::similarity::SimilarityScorer;
use crate::wordlists::HINT_WORDS;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Owns every session; sessions live for the whole process
///
/// A single mutex guards the session map, so concurrent guesses against the
/// same session never lose history entries.
pub struct WordGameStore {
    sessions: Mutex<FxHashMap<String, GameSession>>,
    scorer: SimilarityScorer,
    embeddings: Arc<EmbeddingProvider>,
    threshold: f64,
}

impl WordGameStore {
    /// Create a store scoring with `scorer`; guesses at or above `threshold` win
    #[must_use]
    pub fn new(scorer: SimilarityScorer, embeddings: Arc<EmbeddingProvider>, threshold: f64) -> Self {
        Self {
            sessions: Mutex::new(FxHashMap::default()),
            scorer,
            embeddings,
            threshold,
        }
    }

    /// Success threshold
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The scorer used for guesses
    #[must_use]
    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// The shared embedding provider
    #[must_use]
    pub fn embeddings(&self) -> &EmbeddingProvider {
        &self.embeddings
    }

    /// Start a session against the secret word and return its id
    pub fn start_game(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let target = self.scorer.anchor().clone();
        let target_embedding = self.embeddings.embed(target.text());

        let session = GameSession::new(id.clone(), target, target_embedding);
        self.sessions.lock().insert(id.clone(), session);

        info!(session_id = %id, "started word game session");
        id
    }

    /// Score a guess and append it to the session history
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if `session_id` is unknown.
    pub fn check_guess(&self, session_id: &str, guess: &str) -> Result<GuessOutcome> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))?;

        let guess = Word::new(guess);
        let similarity = if guess == *session.target() {
            100.0
        } else {
            self.scorer.score_words(session.target(), &guess).0
        };
        session.record(&guess, similarity);

        debug!(session_id, guess = guess.text(), similarity, "scored guess");

        Ok(GuessOutcome {
            guess: guess.into_text(),
            similarity: round2(similarity),
            is_valid_word: true,
            is_successful: similarity >= self.threshold,
        })
    }

    /// The secret word for a session
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if `session_id` is unknown.
    pub fn reveal_word(&self, session_id: &str) -> Result<String> {
        self.sessions
            .lock()
            .get(session_id)
            .map(|s| s.target().text().to_string())
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))
    }

    /// A session's guess history, oldest first
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if `session_id` is unknown.
    pub fn guesses(&self, session_id: &str) -> Result<Vec<GuessRecord>> {
        self.sessions
            .lock()
            .get(session_id)
            .map(|s| s.guesses().to_vec())
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))
    }

    /// Static hint list, independent of any session
    #[must_use]
    pub fn valid_words(&self) -> &'static [&'static str] {
        HINT_WORDS
    }

    /// Number of sessions ever started
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::SimilarityTable;

    fn store() -> WordGameStore {
        let table = Arc::new(SimilarityTable::builtin());
        let embeddings = Arc::new(EmbeddingProvider::synthetic(&table, 100));
        WordGameStore::new(SimilarityScorer::new(table), embeddings, 95.0)
    }

    #[test]
    fn start_game_returns_unique_ids() {
        let store = store();
        let a = store.start_game();
        let b = store.start_game();

        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(store.session_count(), 2);
    }

    #[test]
    fn start_game_caches_target_embedding() {
        let store = store();
        store.start_game();
        assert!(store.embeddings().cached("espionage").is_some());
    }

    #[test]
    fn exact_guess_wins() {
        let store = store();
        let id = store.start_game();

        let outcome = store.check_guess(&id, "  Espionage ").unwrap();
        assert_eq!(outcome.guess, "espionage");
        assert!((outcome.similarity - 100.0).abs() < f64::EPSILON);
        assert!(outcome.is_successful);
        assert!(outcome.is_valid_word);
    }

    #[test]
    fn close_guess_is_not_enough() {
        let store = store();
        let id = store.start_game();

        let outcome = store.check_guess(&id, "spy").unwrap();
        assert!((outcome.similarity - 90.0).abs() < f64::EPSILON);
        assert!(!outcome.is_successful);
    }

    #[test]
    fn threshold_is_inclusive() {
        let table = Arc::new(SimilarityTable::builtin());
        let embeddings = Arc::new(EmbeddingProvider::synthetic(&table, 100));
        let store = WordGameStore::new(SimilarityScorer::new(table), embeddings, 90.0);
        let id = store.start_game();

        assert!(store.check_guess(&id, "agent").unwrap().is_successful);
        assert!(!store.check_guess(&id, "surveillance").unwrap().is_successful);
    }

    #[test]
    fn unknown_guesses_are_still_valid() {
        let store = store();
        let id = store.start_game();

        let outcome = store.check_guess(&id, "xyzzy").unwrap();
        assert!(outcome.is_valid_word);
        assert!((outcome.similarity - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn history_records_every_guess() {
        let store = store();
        let id = store.start_game();

        store.check_guess(&id, "spy").unwrap();
        store.check_guess(&id, "Cipher").unwrap();
        store.check_guess(&id, "espionage").unwrap();

        let history = store.guesses(&id).unwrap();
        assert_eq!(
            history,
            vec![
                GuessRecord { word: "spy".to_string(), similarity: 90.0 },
                GuessRecord { word: "cipher".to_string(), similarity: 75.0 },
                GuessRecord { word: "espionage".to_string(), similarity: 100.0 },
            ]
        );
    }

    #[test]
    fn sessions_are_isolated() {
        let store = store();
        let a = store.start_game();
        let b = store.start_game();

        store.check_guess(&a, "spy").unwrap();
        assert_eq!(store.guesses(&a).unwrap().len(), 1);
        assert!(store.guesses(&b).unwrap().is_empty());
    }

    #[test]
    fn unknown_session_is_not_found() {
        let store = store();
        let missing = GameError::SessionNotFound("nope".to_string());

        assert_eq!(store.check_guess("nope", "spy"), Err(missing.clone()));
        assert_eq!(store.reveal_word("nope"), Err(missing.clone()));
        assert_eq!(store.guesses("nope"), Err(missing));
    }

    #[test]
    fn reveal_returns_target() {
        let store = store();
        let id = store.start_game();
        assert_eq!(store.reveal_word(&id).unwrap(), "espionage");
    }

    #[test]
    fn valid_words_are_static_hints() {
        let store = store();
        assert_eq!(
            store.valid_words(),
            ["espionage", "spy", "agent", "surveillance", "covert", "intelligence"]
        );
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert!((round2(46.004) - 46.0).abs() < 1e-12);
        assert!((round2(12.345_678) - 12.35).abs() < 1e-12);
    }

    #[test]
    fn concurrent_guesses_are_not_lost() {
        let store = store();
        let id = store.start_game();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        store.check_guess(&id, "spy").unwrap();
                    }
                });
            }
        });

        assert_eq!(store.guesses(&id).unwrap().len(), 200);
    }
}
