//! Parse → offset → render pipeline

use super::config::FormatterConfig;
use crate::cue::CueParser;
use crate::model::{find_format, FormatOption, TrackRecord};
use crate::offset::{apply_offset, parse_offset, OffsetError};
use crate::render::render_all;
use thiserror::Error;

/// Reasons a configuration cannot be turned into a pipeline
#[derive(Debug, Error)]
pub enum FormatterError {
    #[error(transparent)]
    InvalidOffset(#[from] OffsetError),

    #[error("unknown format '{0}'")]
    UnknownFormat(String),
}

/// Result of formatting one cue sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    /// Parsed records with the offset applied
    pub tracks: Vec<TrackRecord>,

    /// Rendered lines joined with `\n`
    pub text: String,
}

impl FormattedOutput {
    /// Number of parsed tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

/// Validated, reusable formatting pipeline
#[derive(Debug, Clone)]
pub struct FormatPipeline {
    parser: CueParser,
    offset_seconds: i64,
    format: &'static FormatOption,
    template: String,
}

impl FormatPipeline {
    /// Validate the configuration and build a pipeline.
    ///
    /// Fails on an invalid offset so callers never render zero-shifted output
    /// by mistake.
    pub fn new(config: FormatterConfig) -> Result<Self, FormatterError> {
        let offset_seconds = parse_offset(&config.offset)?;

        let format = find_format(&config.format_id)
            .ok_or_else(|| FormatterError::UnknownFormat(config.format_id.clone()))?;

        let template = match (format.is_custom(), config.custom_template) {
            (true, Some(template)) => template,
            _ => format.template.to_string(),
        };

        log::debug!(
            "Format '{}' with template {:?}, offset {}s",
            format.id,
            template,
            offset_seconds
        );

        Ok(Self {
            parser: CueParser::new().with_performer_fallback(config.performer_fallback),
            offset_seconds,
            format,
            template,
        })
    }

    /// Selected format
    pub fn format(&self) -> &'static FormatOption {
        self.format
    }

    /// Template that will be rendered
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Offset in seconds applied to every start time
    pub fn offset_seconds(&self) -> i64 {
        self.offset_seconds
    }

    /// Run the full pipeline on cue sheet text
    pub fn run(&self, cue_text: &str) -> FormattedOutput {
        let parsed = self.parser.parse(cue_text);
        log::info!("Parsed {} track(s)", parsed.len());

        let without_performer = parsed.iter().filter(|t| !t.has_performer()).count();
        if without_performer > 0 {
            log::debug!("{} track(s) have no performer", without_performer);
        }

        let tracks = if self.offset_seconds == 0 {
            parsed
        } else {
            log::info!("Shifting start times by {}s", self.offset_seconds);
            apply_offset(&parsed, self.offset_seconds)
        };

        let text = render_all(&tracks, &self.template);

        FormattedOutput { tracks, text }
    }
}
