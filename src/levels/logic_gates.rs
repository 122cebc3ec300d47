//! Logic-gate ordering puzzle
//!
//! Each circuit expects an exact ordered sequence of gate names. The level is
//! complete only once every circuit has been solved.

use serde::Serialize;

/// One circuit and its expected gate order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    pub id: String,
    pub solution: Vec<String>,
    pub solved: bool,
}

impl Circuit {
    pub fn new(id: impl Into<String>, solution: &[&str]) -> Self {
        Self {
            id: id.into(),
            solution: solution.iter().map(|&g| g.to_string()).collect(),
            solved: false,
        }
    }
}

/// Result of checking a gate sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogicGateResult {
    pub correct: bool,
    pub completed: bool,
    pub all_circuits_solved: bool,
    pub circuits_solved: Vec<String>,
}

/// The set of circuits for the logic-gate level
#[derive(Debug, Clone)]
pub struct LogicGates {
    circuits: Vec<Circuit>,
}

impl Default for LogicGates {
    fn default() -> Self {
        Self::new(vec![
            Circuit::new("circuit1", &["NOT", "AND", "OR"]),
            Circuit::new("circuit2", &["NAND", "OR", "NOR"]),
        ])
    }
}

impl LogicGates {
    #[must_use]
    pub fn new(circuits: Vec<Circuit>) -> Self {
        Self { circuits }
    }

    #[must_use]
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// Check a submitted sequence; a correct one marks the circuit solved
    ///
    /// Only an exact, in-order, case-sensitive match counts. Unknown circuit
    /// ids are never correct.
    pub fn check(&mut self, circuit_id: &str, submitted: &[String]) -> bool {
        let Some(circuit) = self.circuits.iter_mut().find(|c| c.id == circuit_id) else {
            return false;
        };

        let correct = circuit.solution == submitted;
        if correct {
            circuit.solved = true;
        }
        correct
    }

    /// Whether every circuit is solved
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.circuits.iter().all(|c| c.solved)
    }

    /// Ids of solved circuits, in circuit order
    #[must_use]
    pub fn solved_ids(&self) -> Vec<String> {
        self.circuits
            .iter()
            .filter(|c| c.solved)
            .map(|c| c.id.clone())
            .collect()
    }

    /// Mark every circuit unsolved
    pub fn reset(&mut self) {
        for circuit in &mut self.circuits {
            circuit.solved = false;
        }
    }
}
