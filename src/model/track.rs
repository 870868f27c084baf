use serde::{Deserialize, Serialize};

/// A single track parsed from a cue sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Track title (never empty for an emitted record)
    pub title: String,

    /// Performer, empty when the track block had none and no fallback applied
    pub performer: String,

    /// Start time as `HH:MM:SS`
    pub start_at: String,
}

impl TrackRecord {
    /// Create a new track record
    pub fn new(
        title: impl Into<String>,
        performer: impl Into<String>,
        start_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            performer: performer.into(),
            start_at: start_at.into(),
        }
    }

    /// Copy of this record with a different start time
    pub fn with_start_at(&self, start_at: impl Into<String>) -> Self {
        Self {
            start_at: start_at.into(),
            ..self.clone()
        }
    }

    /// Whether a performer is known for this track
    pub fn has_performer(&self) -> bool {
        !self.performer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_start_at_leaves_original_untouched() {
        let track = TrackRecord::new("Intro", "DJ", "00:01:30");
        let shifted = track.with_start_at("00:01:35");

        assert_eq!(track.start_at, "00:01:30");
        assert_eq!(shifted.start_at, "00:01:35");
        assert_eq!(shifted.title, "Intro");
        assert_eq!(shifted.performer, "DJ");
    }

    #[test]
    fn test_has_performer() {
        assert!(TrackRecord::new("A", "B", "00:00:00").has_performer());
        assert!(!TrackRecord::new("A", "", "00:00:00").has_performer());
    }
}
