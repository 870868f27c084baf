//! Cue Formatter - rekordbox cue sheet to tracklist formatter
//!
//! Parses a rekordbox-style `.cue` file into track records, shifts their
//! start times by a uniform offset and renders each track through a
//! user-selectable template.

pub mod cue;
pub mod export;
pub mod input;
pub mod model;
pub mod offset;
pub mod render;

pub use cue::{parse_cue, CueParser, PerformerFallback};
pub use export::{FormatPipeline, FormattedOutput, FormatterConfig, FormatterError};
pub use model::TrackRecord;
pub use offset::{apply_offset, parse_offset, OffsetError};
pub use render::{render, render_all};
