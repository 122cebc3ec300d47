//! Access-pattern classification quiz

use serde::Serialize;

/// Result of checking a set of classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessPatternResult {
    pub correct: bool,
    pub completed: bool,
}

/// Expected label for each access log entry, in order
#[derive(Debug, Clone)]
pub struct AccessPatterns {
    answers: Vec<String>,
}

impl Default for AccessPatterns {
    fn default() -> Self {
        Self::new(&["Unauthorized", "Unauthorized", "Authorized", "Unauthorized"])
    }
}

impl AccessPatterns {
    #[must_use]
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|&a| a.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Exact, in-order, case-sensitive comparison
    #[must_use]
    pub fn check(&self, submitted: &[String]) -> bool {
        self.answers == submitted
    }
}
