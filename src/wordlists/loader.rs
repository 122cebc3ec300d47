//! Similarity table loading utilities
//!
//! Provides functions to load a custom similarity table from a file or use the
//! embedded constants.

use crate::similarity::SimilarityEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Load similarity entries from a file
///
/// Each non-empty line holds `word related score`, separated by whitespace.
/// Lines starting with `#` are comments. Malformed lines and scores outside
/// `[0, 100]` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use datahunt::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/similarities.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SimilarityEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Parse similarity entries from text in the `word related score` format
#[must_use]
pub fn parse_entries(content: &str) -> Vec<SimilarityEntry> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let mut fields = trimmed.split_whitespace();
            let word = fields.next()?;
            let related = fields.next()?;
            let score: f64 = fields.next()?.parse().ok()?;
            if fields.next().is_some() || !(0.0..=100.0).contains(&score) {
                return None;
            }

            Some(SimilarityEntry::new(word, related, score))
        })
        .collect()
}

/// Convert the embedded triples to similarity entries
///
/// # Examples
/// ```
/// use datahunt::wordlists::loader::entries_from_slice;
/// use datahunt::wordlists::BASE_SIMILARITIES;
///
/// let entries = entries_from_slice(BASE_SIMILARITIES);
/// assert_eq!(entries.len(), BASE_SIMILARITIES.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str, f64)]) -> Vec<SimilarityEntry> {
    slice
        .iter()
        .map(|&(word, related, score)| SimilarityEntry::new(word, related, score))
        .collect()
}
