//! Data model shared by the parser, offset engine and renderer
//!
//! Records are rebuilt from the input text on every run and never
//! mutated in place; transformations return new records.

mod format;
mod track;

pub use format::{
    find_format, FormatOption, TokenOption, CUSTOM_FORMAT_ID, DEFAULT_FORMAT_ID, FORMAT_OPTIONS,
    TOKEN_OPTIONS,
};
pub use track::TrackRecord;
