//! Formatter configuration

use crate::cue::PerformerFallback;
use crate::model::{CUSTOM_FORMAT_ID, DEFAULT_FORMAT_ID};

/// Configuration for one formatting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Offset text, e.g. `+5`, `-00:30` (empty = no shift)
    pub offset: String,

    /// Id of the selected built-in format
    pub format_id: String,

    /// User template, used when the `custom` format is selected
    pub custom_template: Option<String>,

    /// Performer policy for track blocks without `PERFORMER`
    pub performer_fallback: PerformerFallback,
}

impl FormatterConfig {
    /// Create a configuration with the default format and no offset
    pub fn new() -> Self {
        Self {
            offset: String::new(),
            format_id: DEFAULT_FORMAT_ID.to_string(),
            custom_template: None,
            performer_fallback: PerformerFallback::None,
        }
    }

    /// Set the offset text
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Select a built-in format by id
    pub fn with_format(mut self, format_id: impl Into<String>) -> Self {
        self.format_id = format_id.into();
        self
    }

    /// Use a custom template (selects the `custom` format)
    pub fn with_custom_template(mut self, template: impl Into<String>) -> Self {
        self.custom_template = Some(template.into());
        self.format_id = CUSTOM_FORMAT_ID.to_string();
        self
    }

    /// Set the performer fallback policy
    pub fn with_performer_fallback(mut self, fallback: PerformerFallback) -> Self {
        self.performer_fallback = fallback;
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new()
    }
}
