//! Request/response layer over a [`LevelService`]
//!
//! Requests are tagged by `op`. Every outcome, including unknown sessions and
//! locked levels, is returned as a [`Response`] value; nothing here fails.

use crate::error::GameError;
use crate::game::GuessRecord;
use crate::levels::{AccessPatternResult, LevelService, LogicGateResult, SolutionOutcome, WordGuessResult};
use serde::{Deserialize, Serialize};

/// Message for an accepted solution
pub const SOLVED_MESSAGE: &str = "Correct! Proceed to the next level.";

/// Message for a rejected solution
pub const REJECTED_MESSAGE: &str = "Invalid solution";

/// Error text for an unknown session id
pub const INVALID_SESSION: &str = "Invalid session ID";

/// Detail attached to a locked-level rejection
pub const LEVEL_LOCKED_DETAIL: &str = "Level not available yet";

/// HTTP-style status for a locked level
pub const FORBIDDEN_STATUS: u16 = 403;

/// One client request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    StartGame,
    Guess {
        session_id: String,
        guess: String,
    },
    Reveal {
        session_id: String,
    },
    Guesses {
        session_id: String,
    },
    Words,
    Solution {
        level_id: u32,
        #[serde(default)]
        dev_mode: bool,
    },
    Levels,
    LogicGates {
        sequence: Vec<String>,
        circuit_id: String,
    },
    ResetLogicGates,
    AccessPatterns {
        answers: Vec<String>,
    },
    Health,
}

/// Reply payloads, serialized without a variant tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Session { session_id: String },
    Guess(WordGuessResult),
    Reveal { target_word: String },
    History { guesses: Vec<GuessRecord> },
    Words { words: Vec<&'static str> },
    Solved { message: &'static str, next_level: Option<u32> },
    Rejected { message: &'static str },
    Levels { completed: Vec<u32>, available: Vec<u32> },
    LogicGates(LogicGateResult),
    Reset { reset: bool },
    AccessPatterns(AccessPatternResult),
    Health { status: &'static str },
    Forbidden { status: u16, detail: &'static str },
    Error { error: String },
}

impl Response {
    /// Whether this reply reports a failure rather than a result
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Forbidden { .. } | Self::Error { .. })
    }
}

impl From<GameError> for Response {
    fn from(err: GameError) -> Self {
        match err {
            GameError::SessionNotFound(_) => Self::Error {
                error: INVALID_SESSION.to_string(),
            },
            GameError::LevelLocked(_) => Self::Forbidden {
                status: FORBIDDEN_STATUS,
                detail: LEVEL_LOCKED_DETAIL,
            },
        }
    }
}

/// Dispatch a request against `service`
///
/// # Examples
/// ```
/// use datahunt::api::{handle, Request, Response};
/// use datahunt::config::GameConfig;
/// use datahunt::levels::LevelService;
///
/// let service = LevelService::new(&GameConfig::default());
/// let reply = handle(&service, Request::Health);
/// assert_eq!(reply, Response::Health { status: "healthy" });
/// ```
pub fn handle(service: &LevelService, request: Request) -> Response {
    match request {
        Request::StartGame => Response::Session {
            session_id: service.start_word_game(),
        },
        Request::Guess { session_id, guess } => service
            .check_guess(&session_id, &guess)
            .map_or_else(Response::from, Response::Guess),
        Request::Reveal { session_id } => service
            .reveal_word(&session_id)
            .map_or_else(Response::from, |target_word| Response::Reveal { target_word }),
        Request::Guesses { session_id } => service
            .guesses(&session_id)
            .map_or_else(Response::from, |guesses| Response::History { guesses }),
        Request::Words => Response::Words {
            words: service.valid_words().to_vec(),
        },
        Request::Solution { level_id, dev_mode } => match service.submit_solution(level_id, dev_mode) {
            Ok(SolutionOutcome::Solved { next_level }) => Response::Solved {
                message: SOLVED_MESSAGE,
                next_level,
            },
            Ok(SolutionOutcome::Rejected) => Response::Rejected {
                message: REJECTED_MESSAGE,
            },
            Err(err) => err.into(),
        },
        Request::Levels => Response::Levels {
            completed: service.completed_levels().into_iter().collect(),
            available: service.available_levels(),
        },
        Request::LogicGates { sequence, circuit_id } => {
            Response::LogicGates(service.check_logic_gates(&sequence, &circuit_id))
        }
        Request::ResetLogicGates => {
            service.reset_logic_gates();
            Response::Reset { reset: true }
        }
        Request::AccessPatterns { answers } => {
            Response::AccessPatterns(service.check_access_patterns(&answers))
        }
        Request::Health => Response::Health { status: "healthy" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use serde_json::{Value, json};

    fn service() -> LevelService {
        LevelService::new(&GameConfig::default())
    }

    fn call(service: &LevelService, request: Value) -> Value {
        let request: Request = serde_json::from_value(request).unwrap();
        serde_json::to_value(handle(service, request)).unwrap()
    }

    #[test]
    fn requests_parse_by_op() {
        let request: Request = serde_json::from_str(r#"{"op":"solution","level_id":2}"#).unwrap();
        assert_eq!(request, Request::Solution { level_id: 2, dev_mode: false });

        let request: Request = serde_json::from_str(r#"{"op":"reset_logic_gates"}"#).unwrap();
        assert_eq!(request, Request::ResetLogicGates);

        assert!(serde_json::from_str::<Request>(r#"{"op":"explode"}"#).is_err());
    }

    #[test]
    fn word_game_round_trip() {
        let s = service();
        let started = call(&s, json!({"op": "start_game"}));
        let id = started["session_id"].as_str().unwrap().to_string();

        let reply = call(&s, json!({"op": "guess", "session_id": id, "guess": "spy"}));
        assert_eq!(
            reply,
            json!({
                "guess": "spy",
                "similarity": 90.0,
                "is_valid_word": true,
                "is_successful": false,
                "completed": false
            })
        );

        let reply = call(&s, json!({"op": "reveal", "session_id": id}));
        assert_eq!(reply, json!({"target_word": "espionage"}));

        let reply = call(&s, json!({"op": "guesses", "session_id": id}));
        assert_eq!(reply, json!({"guesses": [{"word": "spy", "similarity": 90.0}]}));
    }

    #[test]
    fn unknown_session_is_error_payload() {
        let s = service();
        for op in ["guess", "reveal", "guesses"] {
            let reply = call(&s, json!({"op": op, "session_id": "nope", "guess": "spy"}));
            assert_eq!(reply, json!({"error": "Invalid session ID"}), "{op}");
        }
    }

    #[test]
    fn words_lists_hints() {
        let reply = call(&service(), json!({"op": "words"}));
        assert_eq!(reply["words"].as_array().unwrap().len(), 6);
        assert_eq!(reply["words"][0], "espionage");
    }

    #[test]
    fn solution_messages() {
        let s = service();
        assert_eq!(
            call(&s, json!({"op": "solution", "level_id": 1})),
            json!({"message": "Correct! Proceed to the next level.", "next_level": 2})
        );
        assert_eq!(
            call(&s, json!({"op": "solution", "level_id": 5, "dev_mode": true})),
            json!({"message": "Correct! Proceed to the next level.", "next_level": null})
        );

        call(&s, json!({"op": "solution", "level_id": 2}));
        assert_eq!(
            call(&s, json!({"op": "solution", "level_id": 3})),
            json!({"message": "Invalid solution"})
        );
    }

    #[test]
    fn locked_level_is_forbidden() {
        let s = service();
        let request: Request = serde_json::from_value(json!({"op": "solution", "level_id": 4})).unwrap();
        let reply = handle(&s, request);

        assert!(reply.is_error());
        assert_eq!(
            serde_json::to_value(reply).unwrap(),
            json!({"status": 403, "detail": "Level not available yet"})
        );
    }

    #[test]
    fn levels_snapshot() {
        let s = service();
        call(&s, json!({"op": "solution", "level_id": 1}));
        assert_eq!(
            call(&s, json!({"op": "levels"})),
            json!({"completed": [1], "available": [1, 2]})
        );
    }

    #[test]
    fn logic_gates_and_reset() {
        let s = service();
        let reply = call(
            &s,
            json!({"op": "logic_gates", "sequence": ["NOT", "AND", "OR"], "circuit_id": "circuit1"}),
        );
        assert_eq!(
            reply,
            json!({
                "correct": true,
                "completed": false,
                "all_circuits_solved": false,
                "circuits_solved": ["circuit1"]
            })
        );

        assert_eq!(call(&s, json!({"op": "reset_logic_gates"})), json!({"reset": true}));
        assert!(!s.check_logic_gates(&[], "circuit1").circuits_solved.contains(&"circuit1".to_string()));
    }

    #[test]
    fn access_patterns_reply() {
        let s = service();
        let reply = call(
            &s,
            json!({"op": "access_patterns", "answers": ["Unauthorized", "Unauthorized", "Authorized", "Unauthorized"]}),
        );
        assert_eq!(reply, json!({"correct": true, "completed": true}));
    }

    #[test]
    fn health() {
        assert_eq!(call(&service(), json!({"op": "health"})), json!({"status": "healthy"}));
    }
}
