//! Template rendering
//!
//! Templates are tokenized once per call into literal and placeholder
//! spans; placeholders resolve against values computed for one track.

mod cleanup;
mod renderer;
mod template;
mod tokens;

pub use renderer::{render, render_all};
pub use template::{tokenize, Segment};
pub use tokens::TokenValues;
