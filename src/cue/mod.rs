//! Rekordbox-style cue sheet parsing
//!
//! Only `TRACK`, `TITLE`, `PERFORMER` and `INDEX 01` are understood;
//! every other line is skipped without error.

mod line;
mod parser;

pub use line::{classify, CueLine};
pub use parser::{parse_cue, CueParser, ParseFallbackError, PerformerFallback, UNKNOWN_ARTIST};
