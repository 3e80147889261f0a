// src/core/timings_parser.rs

use crate::models::{RecordError, TimingInfoLine, TimingRecord, Timings};
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimingsError {
    #[error("Failed to read build output: {0}")]
    Read(#[from] std::io::Error),
    #[error("Line {line_number} of the build output is not a timing record: {source}")]
    Decode {
        line_number: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Line {line_number} of the build output has an invalid timing for '{name}': {source}")]
    InvalidRecord {
        line_number: usize,
        name: String,
        #[source]
        source: RecordError,
    },
}

/// Decodes a single line of `-Z timings=json` output into a target name and its timing.
pub fn decode_line(line: &str, line_number: usize) -> Result<(String, TimingRecord), TimingsError> {
    let info: TimingInfoLine =
        serde_json::from_str(line).map_err(|e| TimingsError::Decode {
            line_number,
            source: e,
        })?;
    let record = TimingRecord::new(info.duration, info.rmeta_time).map_err(|e| {
        TimingsError::InvalidRecord {
            line_number,
            name: info.target.name.clone(),
            source: e,
        }
    })?;
    Ok((info.target.name, record))
}

/// Reads timing records line by line until end-of-stream.
///
/// Every line must be a record; the first one that is not aborts the whole read.
pub fn collect_timings<R: BufRead>(reader: R) -> Result<Timings, TimingsError> {
    let mut timings = Timings::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let (name, record) = decode_line(&line, index + 1)?;
        log::debug!(
            "Timing for '{}': {:.3}s (metadata {:.3}s)",
            name,
            record.duration(),
            record.metadata_duration()
        );
        if let Some(previous) = timings.insert(name.clone(), record) {
            log::debug!(
                "Target '{}' reported twice, replacing {:.3}s with {:.3}s",
                name,
                previous.duration(),
                record.duration()
            );
        }
    }
    Ok(timings)
}
