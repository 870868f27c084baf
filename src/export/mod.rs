//! Formatting configuration and orchestration

pub mod config;
pub mod pipeline;

pub use config::FormatterConfig;
pub use pipeline::{FormatPipeline, FormattedOutput, FormatterError};
