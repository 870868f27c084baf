//! Offset parsing and application

use super::timecode::{format_seconds, timecode_to_seconds};
use crate::model::TrackRecord;
use thiserror::Error;

/// Offset text that is neither empty, an integer, nor a signed timecode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffsetError {
    #[error("invalid offset '{0}': use seconds (e.g. +5, -2) or time (e.g. +00:30, -00:01:10)")]
    Invalid(String),
}

/// Parse offset text into signed seconds.
///
/// Accepts empty input (zero), a signed integer number of seconds, or an
/// optionally signed `MM:SS` / `HH:MM:SS` timecode.
pub fn parse_offset(text: &str) -> Result<i64, OffsetError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let invalid = || OffsetError::Invalid(text.to_string());

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
        unsigned.parse::<i64>().map_err(|_| invalid())?
    } else {
        let seconds = timecode_to_seconds(unsigned).ok_or_else(invalid)?;
        i64::try_from(seconds).map_err(|_| invalid())?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Shift every record's start time by `offset_seconds`, clamping at zero.
///
/// Returns new records; a start time that cannot be read is passed through
/// unchanged.
pub fn apply_offset(tracks: &[TrackRecord], offset_seconds: i64) -> Vec<TrackRecord> {
    tracks
        .iter()
        .map(|track| match timecode_to_seconds(&track.start_at) {
            Some(seconds) => {
                let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);
                track.with_start_at(format_seconds(seconds.saturating_add(offset_seconds)))
            }
            None => {
                log::warn!(
                    "Leaving unreadable start time {:?} of '{}' unchanged",
                    track.start_at,
                    track.title
                );
                track.clone()
            }
        })
        .collect()
}
