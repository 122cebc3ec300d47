//! Newline-delimited JSON request loop
//!
//! Reads one request per line and writes one reply per line. Malformed lines
//! get an `{error}` reply and the loop keeps going.

use crate::api::{Request, Response, handle};
use crate::levels::LevelService;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Counters for one serving run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    pub handled: usize,
    pub malformed: usize,
}

/// Serve requests from `reader` until end of input
///
/// # Errors
///
/// Returns an error if reading input or writing a reply fails.
pub fn serve<R: BufRead, W: Write>(service: &LevelService, reader: R, mut writer: W) -> Result<ServeStats> {
    let mut stats = ServeStats::default();

    for line in reader.lines() {
        let line = line.context("failed to read request")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(?request, "handling request");
                stats.handled += 1;
                handle(service, request)
            }
            Err(err) => {
                warn!(error = %err, "malformed request");
                stats.malformed += 1;
                Response::Error {
                    error: format!("Invalid request: {err}"),
                }
            }
        };

        serde_json::to_writer(&mut writer, &response).context("failed to encode reply")?;
        writer.write_all(b"\n").context("failed to write reply")?;
        writer.flush().context("failed to flush reply")?;
    }

    Ok(stats)
}
