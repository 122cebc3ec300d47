//! The similarity ladder
//!
//! Rules are tried in a fixed order and the first applicable one wins:
//! 1. Table lookup
//! 2. Exact match (100)
//! 3. Anchor heuristics: first fragment of [`ANCHOR_HEURISTICS`] found in the
//!    non-anchor word
//! 4. Substring containment in either direction (65)
//! 5. Common prefix of at least 3 characters (40 + 2 per character)
//! 6. Fallback (20)

use super::SimilarityTable;
use crate::core::Word;
use crate::wordlists::ANCHOR_WORD;
use std::sync::Arc;

/// Fragments indicating relevance to the anchor word, in match order
///
/// Order is a tie-break: "covertly" matches "cover" before "covert".
pub const ANCHOR_HEURISTICS: &[(&str, f64)] = &[
    ("spy", 90.0),
    ("secret", 75.0),
    ("agent", 85.0),
    ("intelligen", 80.0),
    ("cover", 80.0),
    ("surveillance", 85.0),
    ("reconn", 70.0),
    ("infiltrat", 80.0),
    ("stealth", 65.0),
    ("decept", 70.0),
    ("crypt", 50.0),
    ("secur", 60.0),
    ("mission", 65.0),
    ("shadow", 60.0),
    ("covert", 85.0),
    ("classified", 75.0),
];

const CONTAINMENT_SCORE: f64 = 65.0;
const MIN_COMMON_PREFIX: usize = 3;
const PREFIX_BASE_SCORE: f64 = 40.0;
const PREFIX_SCORE_PER_CHAR: f64 = 2.0;
const FALLBACK_SCORE: f64 = 20.0;

/// Which rule of the ladder produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRule {
    Table,
    Exact,
    AnchorFragment(&'static str),
    Containment,
    CommonPrefix(usize),
    Fallback,
}

/// Deterministic, total, case-insensitive word scorer
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    table: Arc<SimilarityTable>,
    anchor: Word,
}

impl SimilarityScorer {
    /// Create a scorer over `table`, anchored on the secret word
    #[must_use]
    pub fn new(table: Arc<SimilarityTable>) -> Self {
        Self::with_anchor(table, ANCHOR_WORD)
    }

    /// Create a scorer with a custom anchor word for the heuristic rule
    #[must_use]
    pub fn with_anchor(table: Arc<SimilarityTable>, anchor: &str) -> Self {
        Self {
            table,
            anchor: Word::new(anchor),
        }
    }

    /// The table backing the first rule
    #[must_use]
    pub fn table(&self) -> &SimilarityTable {
        &self.table
    }

    /// The anchor word
    #[must_use]
    pub fn anchor(&self) -> &Word {
        &self.anchor
    }

    /// Score `candidate` against `reference` in `[0, 100]`
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use datahunt::similarity::{SimilarityScorer, SimilarityTable};
    ///
    /// let scorer = SimilarityScorer::new(Arc::new(SimilarityTable::builtin()));
    /// assert_eq!(scorer.score("espionage", "SPY"), 90.0);
    /// assert_eq!(scorer.score("cat", "dog"), 20.0);
    /// ```
    #[must_use]
    pub fn score(&self, reference: &str, candidate: &str) -> f64 {
        self.score_with_rule(reference, candidate).0
    }

    /// Score a pair and report which rule fired
    #[must_use]
    pub fn score_with_rule(&self, reference: &str, candidate: &str) -> (f64, ScoreRule) {
        let reference = Word::new(reference);
        let candidate = Word::new(candidate);
        self.score_words(&reference, &candidate)
    }

    /// Score two already-normalized words
    #[must_use]
    pub fn score_words(&self, reference: &Word, candidate: &Word) -> (f64, ScoreRule) {
        if let Some(score) = self.table.get(reference.text(), candidate.text()) {
            return (score, ScoreRule::Table);
        }

        if reference == candidate {
            return (100.0, ScoreRule::Exact);
        }

        let other = if *reference == self.anchor {
            Some(candidate)
        } else if *candidate == self.anchor {
            Some(reference)
        } else {
            None
        };
        if let Some(other) = other
            && let Some(&(fragment, score)) = ANCHOR_HEURISTICS
                .iter()
                .find(|(fragment, _)| other.contains(fragment))
        {
            return (score, ScoreRule::AnchorFragment(fragment));
        }

        if candidate.contains(reference.text()) || reference.contains(candidate.text()) {
            return (CONTAINMENT_SCORE, ScoreRule::Containment);
        }

        let prefix = reference.common_prefix_len(candidate);
        if prefix >= MIN_COMMON_PREFIX {
            let score = PREFIX_BASE_SCORE + PREFIX_SCORE_PER_CHAR * prefix as f64;
            return (score, ScoreRule::CommonPrefix(prefix));
        }

        (FALLBACK_SCORE, ScoreRule::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::SimilarityEntry;

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::new(Arc::new(SimilarityTable::builtin()))
    }

    #[test]
    fn table_lookup_wins() {
        let s = scorer();
        assert_eq!(s.score_with_rule("espionage", "spy"), (90.0, ScoreRule::Table));
        assert_eq!(s.score("espionage", "firewall"), 30.0);
        // "covert" is in the table at 85 even though "cover" matches first
        assert_eq!(s.score("espionage", "covert"), 85.0);
    }

    #[test]
    fn table_lookup_is_order_independent() {
        let s = scorer();
        assert_eq!(s.score("payload", "espionage"), s.score("espionage", "payload"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let s = scorer();
        assert_eq!(s.score("ESPIONAGE", "Agent"), 90.0);
        assert_eq!(s.score(" espionage ", "  cipher"), 75.0);
    }

    #[test]
    fn self_similarity_is_100() {
        let s = scorer();
        for word in ["espionage", "spy", "banana", "", "Zebra"] {
            assert_eq!(s.score(word, word), 100.0, "{word}");
        }
        assert_eq!(s.score_with_rule("banana", "BANANA").1, ScoreRule::Exact);
    }

    #[test]
    fn anchor_fragment_is_first_match() {
        let s = scorer();
        assert_eq!(
            s.score_with_rule("espionage", "spyware"),
            (90.0, ScoreRule::AnchorFragment("spy"))
        );
        // "cover" precedes "covert" in the key order
        assert_eq!(
            s.score_with_rule("espionage", "covertly"),
            (80.0, ScoreRule::AnchorFragment("cover"))
        );
        // "secret" precedes "agent"
        assert_eq!(s.score("espionage", "secretagent"), 75.0);
    }

    #[test]
    fn anchor_fragment_either_side() {
        let s = scorer();
        assert_eq!(s.score("cryptic", "espionage"), 50.0);
        assert_eq!(s.score("espionage", "cryptic"), 50.0);
    }

    #[test]
    fn anchor_fragment_not_applied_without_anchor() {
        let s = scorer();
        // Neither word is the anchor, so "spyware" is scored by prefix rules
        assert_eq!(s.score_with_rule("spyglass", "spyware"), (46.0, ScoreRule::CommonPrefix(3)));
    }

    #[test]
    fn containment_scores_65() {
        let s = scorer();
        assert_eq!(
            s.score_with_rule("espionage", "espionages"),
            (65.0, ScoreRule::Containment)
        );
        assert_eq!(s.score("planet", "plane"), 65.0);
        assert_eq!(s.score("plane", "planet"), 65.0);
    }

    #[test]
    fn empty_guess_is_contained_in_anything() {
        let s = scorer();
        assert_eq!(s.score("espionage", "   "), 65.0);
    }

    #[test]
    fn common_prefix_scores() {
        let s = scorer();
        assert_eq!(s.score("stream", "strong"), 46.0);
        assert_eq!(s.score("espionage", "esprit"), 46.0);
        assert_eq!(s.score("interpret", "interview"), 50.0);
    }

    #[test]
    fn short_prefix_falls_through() {
        let s = scorer();
        assert_eq!(s.score_with_rule("stone", "stack"), (20.0, ScoreRule::Fallback));
    }

    #[test]
    fn fallback_is_20() {
        let s = scorer();
        assert_eq!(s.score("espionage", "banana"), 20.0);
        assert_eq!(s.score("cat", "dog"), 20.0);
    }

    #[test]
    fn unlisted_pairs_are_symmetric() {
        let s = scorer();
        for (a, b) in [("spy", "agent"), ("stream", "strong"), ("espionage", "cryptic")] {
            assert_eq!(s.score(a, b), s.score(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn scores_stay_in_range() {
        let s = scorer();
        for word in ["", "a", "spy", "espionage", "supercalifragilistic", "esp"] {
            let score = s.score("espionage", word);
            assert!((0.0..=100.0).contains(&score), "{word}: {score}");
        }
    }

    #[test]
    fn custom_anchor() {
        let table = SimilarityTable::from_entries(vec![SimilarityEntry::new("heist", "vault", 80.0)]);
        let s = SimilarityScorer::with_anchor(Arc::new(table), "heist");

        assert_eq!(s.score("heist", "vault"), 80.0);
        assert_eq!(s.score("heist", "shadowy"), 60.0);
        // "espionage" is no longer special
        assert_eq!(s.score("espionage", "spyware"), 20.0);
    }
}
