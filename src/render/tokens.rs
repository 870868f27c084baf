//! Token values for one track at one position

use crate::model::TrackRecord;
use crate::offset::timecode_to_seconds;

/// Values every supported token resolves to, computed once per render
#[derive(Debug, Clone)]
pub struct TokenValues<'a> {
    track: &'a TrackRecord,
    start_seconds: String,
    track_no: String,
    track_no_padded: String,
}

impl<'a> TokenValues<'a> {
    /// Build token values for `track` at 0-based `position`
    pub fn new(track: &'a TrackRecord, position: usize) -> Self {
        let number = position + 1;

        Self {
            track,
            start_seconds: timecode_to_seconds(&track.start_at)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            track_no: number.to_string(),
            track_no_padded: format!("{:02}", number),
        }
    }

    /// Value of a token, or `None` when the name is not part of the vocabulary
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let value = match name {
            "start" | "start_at" => &self.track.start_at,
            "start_seconds" => &self.start_seconds,
            "title" | "track_title" => &self.track.title,
            "artist" | "performer" => &self.track.performer,
            "track_no" => &self.track_no,
            "track_no_padded" => &self.track_no_padded,
            _ => return None,
        };
        Some(value.as_str())
    }
}
