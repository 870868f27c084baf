//! Cue sheet parser
//!
//! Scans lines in order with a single "current track" accumulator. A track
//! header closes the open block and starts a new one; a block is emitted
//! only if it saw both a title and an `INDEX 01` time.

use super::line::{classify, CueLine};
use crate::model::TrackRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder performer used by [`PerformerFallback::UnknownArtist`]
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// What to use as performer when a track block has no `PERFORMER` line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformerFallback {
    /// Performer is strictly track-scoped and left empty
    #[default]
    None,

    /// Use the disc-level `PERFORMER` (before the first `TRACK`), if any
    DiscPerformer,

    /// Disc-level performer, else the literal "Unknown Artist"
    UnknownArtist,
}

impl PerformerFallback {
    /// Resolve the performer for a track block that had none
    fn resolve(&self, disc_performer: Option<&str>) -> String {
        match self {
            PerformerFallback::None => String::new(),
            PerformerFallback::DiscPerformer => disc_performer.unwrap_or_default().to_string(),
            PerformerFallback::UnknownArtist => {
                disc_performer.unwrap_or(UNKNOWN_ARTIST).to_string()
            }
        }
    }

    /// Kebab-case name, the same spelling serde uses
    fn name(&self) -> &'static str {
        match self {
            PerformerFallback::None => "none",
            PerformerFallback::DiscPerformer => "disc-performer",
            PerformerFallback::UnknownArtist => "unknown-artist",
        }
    }
}

impl fmt::Display for PerformerFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown performer fallback '{0}' (expected none, disc-performer or unknown-artist)")]
pub struct ParseFallbackError(String);

impl FromStr for PerformerFallback {
    type Err = ParseFallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(PerformerFallback::None),
            "disc" | "disc-performer" => Ok(PerformerFallback::DiscPerformer),
            "unknown" | "unknown-artist" => Ok(PerformerFallback::UnknownArtist),
            _ => Err(ParseFallbackError(s.to_string())),
        }
    }
}

/// Fields collected for the track block currently being read
#[derive(Debug, Default)]
struct PendingTrack {
    title: Option<String>,
    performer: Option<String>,
    start_at: Option<String>,
}

impl PendingTrack {
    fn finish(
        self,
        fallback: PerformerFallback,
        disc_performer: Option<&str>,
    ) -> Option<TrackRecord> {
        let (Some(title), Some(start_at)) = (self.title, self.start_at) else {
            return None;
        };

        let performer = self
            .performer
            .unwrap_or_else(|| fallback.resolve(disc_performer));

        Some(TrackRecord {
            title,
            performer,
            start_at,
        })
    }
}

/// Cue sheet parser
#[derive(Debug, Clone, Copy, Default)]
pub struct CueParser {
    performer_fallback: PerformerFallback,
}

impl CueParser {
    /// Create a parser with strictly track-scoped performers
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the performer fallback policy
    pub fn with_performer_fallback(mut self, fallback: PerformerFallback) -> Self {
        self.performer_fallback = fallback;
        self
    }

    /// Parse cue sheet text into track records, in input order.
    ///
    /// Never fails: unrecognised lines are ignored and incomplete track
    /// blocks are dropped.
    pub fn parse(&self, text: &str) -> Vec<TrackRecord> {
        let normalized = text.replace("\r\n", "\n");

        let mut tracks = Vec::new();
        let mut current: Option<PendingTrack> = None;
        let mut disc_performer: Option<String> = None;
        let mut blocks = 0usize;

        for (line_no, line) in normalized.split('\n').enumerate() {
            let kind = classify(line);

            if kind == CueLine::TrackHeader {
                if let Some(pending) = current.take() {
                    tracks.extend(pending.finish(self.performer_fallback, disc_performer.as_deref()));
                }
                current = Some(PendingTrack::default());
                blocks += 1;
                continue;
            }

            let Some(pending) = current.as_mut() else {
                if let CueLine::Performer(name) = kind {
                    disc_performer = Some(name.to_string());
                }
                continue;
            };

            match kind {
                CueLine::Title(title) => pending.title = Some(title.to_string()),
                CueLine::Performer(name) => pending.performer = Some(name.to_string()),
                CueLine::Index01(timecode) => pending.start_at = Some(timecode.to_string()),
                CueLine::TrackHeader | CueLine::Other => {
                    log::trace!("Ignoring cue line {}: {:?}", line_no + 1, line);
                }
            }
        }

        if let Some(pending) = current.take() {
            tracks.extend(pending.finish(self.performer_fallback, disc_performer.as_deref()));
        }

        let dropped = blocks - tracks.len();
        if dropped > 0 {
            log::debug!("Dropped {} incomplete track block(s)", dropped);
        }
        log::debug!("Parsed {} track(s) from cue sheet", tracks.len());

        tracks
    }
}

/// Parse cue sheet text with strictly track-scoped performers
pub fn parse_cue(text: &str) -> Vec<TrackRecord> {
    CueParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"PERFORMER "Resident DJ"
TITLE "Friday Mix"
FILE "mix.wav" WAVE
  TRACK 01 AUDIO
    TITLE "Intro"
    PERFORMER "Artist A"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "Second"
    INDEX 01 00:04:12
  TRACK 03 AUDIO
    TITLE "Third"
    PERFORMER "Artist C"
    INDEX 01 00:09:45
"#;

    #[test]
    fn test_parse_complete_blocks_in_order() {
        let tracks = parse_cue(SAMPLE);

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0], TrackRecord::new("Intro", "Artist A", "00:00:00"));
        assert_eq!(tracks[1], TrackRecord::new("Second", "", "00:04:12"));
        assert_eq!(tracks[2], TrackRecord::new("Third", "Artist C", "00:09:45"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = SAMPLE.replace('\n', "\r\n");
        assert_eq!(parse_cue(&text), parse_cue(SAMPLE));
    }

    #[test]
    fn test_block_missing_title_is_dropped() {
        let text = "TRACK 01 AUDIO\nTITLE \"One\"\nINDEX 01 00:00:10\nTRACK 02 AUDIO\nINDEX 01 00:03:00\n";
        let tracks = parse_cue(text);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "One");
    }

    #[test]
    fn test_block_missing_index_is_dropped() {
        let text = "TRACK 01 AUDIO\nTITLE \"One\"\nINDEX 00 00:00:10\nTRACK 02 AUDIO\nTITLE \"Two\"\nINDEX 01 00:03:00\n";
        let tracks = parse_cue(text);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Two");
    }

    #[test]
    fn test_later_title_overwrites_earlier() {
        let text = "TRACK 01 AUDIO\nTITLE \"Draft\"\nTITLE \"Final\"\nINDEX 01 00:00:10\n";
        assert_eq!(parse_cue(text)[0].title, "Final");
    }

    #[test]
    fn test_lines_before_first_track_are_not_a_track() {
        let text = "TITLE \"Album\"\nINDEX 01 00:00:00\n";
        assert!(parse_cue(text).is_empty());
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_cue("").is_empty());
        assert!(parse_cue("not a cue sheet\n\n\u{0}").is_empty());
    }

    #[test]
    fn test_disc_performer_fallback() {
        let parser = CueParser::new().with_performer_fallback(PerformerFallback::DiscPerformer);
        let tracks = parser.parse(SAMPLE);

        assert_eq!(tracks[0].performer, "Artist A");
        assert_eq!(tracks[1].performer, "Resident DJ");
    }

    #[test]
    fn test_unknown_artist_fallback() {
        let parser = CueParser::new().with_performer_fallback(PerformerFallback::UnknownArtist);

        let with_disc = parser.parse(SAMPLE);
        assert_eq!(with_disc[1].performer, "Resident DJ");

        let text = "TRACK 01 AUDIO\nTITLE \"Lonely\"\nINDEX 01 00:00:01\n";
        assert_eq!(parser.parse(text)[0].performer, UNKNOWN_ARTIST);
    }

    #[test]
    fn test_disc_performer_fallback_without_disc_performer() {
        let parser = CueParser::new().with_performer_fallback(PerformerFallback::DiscPerformer);
        let text = "TITLE \"Mix\"\nTRACK 01 AUDIO\nTITLE \"Lonely\"\nINDEX 01 00:00:01\n";

        assert_eq!(parser.parse(text)[0].performer, "");
    }

    #[test]
    fn test_performer_inside_track_is_not_disc_performer() {
        let parser = CueParser::new().with_performer_fallback(PerformerFallback::DiscPerformer);
        let text = "TRACK 01 AUDIO\nTITLE \"One\"\nPERFORMER \"Track Only\"\nINDEX 01 00:00:00\n\
                    TRACK 02 AUDIO\nTITLE \"Two\"\nINDEX 01 00:03:00\n";
        let tracks = parser.parse(text);

        assert_eq!(tracks[0].performer, "Track Only");
        assert_eq!(tracks[1].performer, "");
    }

    #[test]
    fn test_performer_fallback_display_round_trips() {
        for (fallback, name) in [
            (PerformerFallback::None, "none"),
            (PerformerFallback::DiscPerformer, "disc-performer"),
            (PerformerFallback::UnknownArtist, "unknown-artist"),
        ] {
            assert_eq!(fallback.to_string(), name);
            assert_eq!(name.parse::<PerformerFallback>().unwrap(), fallback);
        }
    }

    #[test]
    fn test_performer_fallback_from_str() {
        assert_eq!("none".parse::<PerformerFallback>().unwrap(), PerformerFallback::None);
        assert_eq!("Disc".parse::<PerformerFallback>().unwrap(), PerformerFallback::DiscPerformer);
        assert_eq!(
            "unknown-artist".parse::<PerformerFallback>().unwrap(),
            PerformerFallback::UnknownArtist
        );
        assert!("sometimes".parse::<PerformerFallback>().is_err());
    }
}
