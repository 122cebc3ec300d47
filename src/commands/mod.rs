//! Command implementations

pub mod calibrate;
pub mod play;
pub mod score;
pub mod serve;

pub use calibrate::{CalibrationEntry, CalibrationReport, run_calibration};
pub use play::{PlayInput, run_play};
pub use score::{ScoreResult, score_pair};
pub use serve::{ServeStats, serve};
