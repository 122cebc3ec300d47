//! Normalized word representation
//!
//! A Word stores player or table text in canonical form so that every
//! comparison downstream is case-insensitive and whitespace-insensitive.

use std::fmt;

/// A word in canonical form: surrounding whitespace trimmed, lowercased
///
/// There is no dictionary validation; any text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from arbitrary text
    ///
    /// # Examples
    /// ```
    /// use datahunt::core::Word;
    ///
    /// let word = Word::new("  Espionage ");
    /// assert_eq!(word.text(), "espionage");
    /// ```
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().trim().to_lowercase(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the word and return the owned text
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Whether the normalized text is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `fragment` occurs anywhere in this word
    #[inline]
    #[must_use]
    pub fn contains(&self, fragment: &str) -> bool {
        self.text.contains(fragment)
    }

    /// Count matching leading characters, stopping at the first mismatch
    ///
    /// # Examples
    /// ```
    /// use datahunt::core::Word;
    ///
    /// let a = Word::new("stream");
    /// let b = Word::new("strong");
    /// assert_eq!(a.common_prefix_len(&b), 3);
    /// ```
    #[must_use]
    pub fn common_prefix_len(&self, other: &Self) -> usize {
        self.text
            .chars()
            .zip(other.text.chars())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Reproducible per-word seed: the sum of the character code points
    #[must_use]
    pub fn char_code_sum(&self) -> u64 {
        self.text.chars().map(|c| u64::from(u32::from(c))).sum()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
