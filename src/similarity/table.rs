//! Curated similarity table with symmetric closure

use crate::wordlists::{BASE_SIMILARITIES, loader::entries_from_slice};
use rustc_hash::FxHashMap;

/// One hand-authored similarity: `word -> related = score`
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityEntry {
    pub word: String,
    pub related: String,
    pub score: f64,
}

impl SimilarityEntry {
    /// Create an entry, lowercasing both words
    pub fn new(word: impl AsRef<str>, related: impl AsRef<str>, score: f64) -> Self {
        Self {
            word: word.as_ref().trim().to_lowercase(),
            related: related.as_ref().trim().to_lowercase(),
            score,
        }
    }
}

/// Mapping from word to related word to score
///
/// Built once from authored entries plus their reverse entries. A reverse
/// entry never overwrites an authored one, and every word in the table scores
/// 100 against itself.
#[derive(Debug, Clone, Default)]
pub struct SimilarityTable {
    scores: FxHashMap<String, FxHashMap<String, f64>>,
}

impl SimilarityTable {
    /// Build a table from authored entries and their symmetric closure
    ///
    /// # Examples
    /// ```
    /// use datahunt::similarity::{SimilarityEntry, SimilarityTable};
    ///
    /// let table = SimilarityTable::from_entries(vec![
    ///     SimilarityEntry::new("espionage", "spy", 90.0),
    /// ]);
    /// assert_eq!(table.get("spy", "espionage"), Some(90.0));
    /// assert_eq!(table.get("spy", "spy"), Some(100.0));
    /// ```
    #[must_use]
    pub fn from_entries(entries: Vec<SimilarityEntry>) -> Self {
        let mut scores: FxHashMap<String, FxHashMap<String, f64>> = FxHashMap::default();

        for entry in &entries {
            scores
                .entry(entry.word.clone())
                .or_default()
                .insert(entry.related.clone(), entry.score);
        }

        for entry in entries {
            let reverse = scores.entry(entry.related.clone()).or_default();
            reverse.entry(entry.word.clone()).or_insert(entry.score);
        }

        for (word, related) in &mut scores {
            related.insert(word.clone(), 100.0);
        }

        Self { scores }
    }

    /// The compiled-in base table
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(entries_from_slice(BASE_SIMILARITIES))
    }

    /// Look up the score for a pair of (already normalized) words
    #[must_use]
    pub fn get(&self, word: &str, related: &str) -> Option<f64> {
        self.scores.get(word)?.get(related).copied()
    }

    /// All words related to `word`, with their scores
    #[must_use]
    pub fn related(&self, word: &str) -> Option<&FxHashMap<String, f64>> {
        self.scores.get(word)
    }

    /// Every word that appears anywhere in the table, sorted
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.scores.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ANCHOR_WORD;

    #[test]
    fn builtin_has_every_related_word() {
        let table = SimilarityTable::builtin();

        // 27 related words plus the anchor itself
        assert_eq!(table.len(), 28);
        assert!(table.words().contains(&"surveillance"));
    }

    #[test]
    fn builtin_forward_lookup() {
        let table = SimilarityTable::builtin();
        assert_eq!(table.get(ANCHOR_WORD, "spy"), Some(90.0));
        assert_eq!(table.get(ANCHOR_WORD, "coordinates"), Some(25.0));
        assert_eq!(table.get(ANCHOR_WORD, "banana"), None);
    }

    #[test]
    fn builtin_is_symmetric() {
        let table = SimilarityTable::builtin();

        for word in table.words() {
            for (related, &score) in table.related(word).unwrap() {
                assert_eq!(
                    table.get(related, word),
                    Some(score),
                    "{word} -> {related} is not mirrored"
                );
            }
        }
    }

    #[test]
    fn every_word_scores_100_against_itself() {
        let table = SimilarityTable::builtin();
        for word in table.words() {
            assert_eq!(table.get(word, word), Some(100.0));
        }
    }

    #[test]
    fn reverse_entries_do_not_overwrite_authored_ones() {
        let table = SimilarityTable::from_entries(vec![
            SimilarityEntry::new("espionage", "spy", 90.0),
            SimilarityEntry::new("spy", "espionage", 70.0),
        ]);

        assert_eq!(table.get("espionage", "spy"), Some(90.0));
        assert_eq!(table.get("spy", "espionage"), Some(70.0));
    }

    #[test]
    fn related_words_are_not_linked_to_each_other() {
        let table = SimilarityTable::builtin();
        assert_eq!(table.get("spy", "agent"), None);
    }

    #[test]
    fn empty_table() {
        let table = SimilarityTable::from_entries(Vec::new());
        assert!(table.is_empty());
        assert!(table.words().is_empty());
    }
}
