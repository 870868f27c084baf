//! Uniform time offset for parsed start times

mod engine;
mod timecode;

pub use engine::{apply_offset, parse_offset, OffsetError};
pub use timecode::{format_seconds, timecode_to_seconds};
