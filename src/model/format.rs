use serde::Serialize;

/// Id of the user-editable format
pub const CUSTOM_FORMAT_ID: &str = "custom";

/// Id of the format selected when none is given
pub const DEFAULT_FORMAT_ID: &str = "start-title-performer";

/// A named output template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatOption {
    /// Unique key used for selection
    pub id: &'static str,

    /// Display name
    pub label: &'static str,

    /// Template string with `{token}` placeholders
    pub template: &'static str,
}

impl FormatOption {
    /// Whether this option is the user-editable one
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_FORMAT_ID
    }
}

/// Built-in formats, in display order
pub const FORMAT_OPTIONS: &[FormatOption] = &[
    FormatOption {
        id: "start-title-performer",
        label: "Start + Title + Performer",
        template: "{start} {title} by {artist}",
    },
    FormatOption {
        id: "start-performer-title",
        label: "Start + Performer + Title",
        template: "{start} {artist} - {title}",
    },
    FormatOption {
        id: "title-performer-start",
        label: "Title + Performer + Start",
        template: "{title} - {artist} ({start})",
    },
    FormatOption {
        id: "csv",
        label: "CSV",
        template: "{track_no},{start},{title},{artist}",
    },
    FormatOption {
        id: CUSTOM_FORMAT_ID,
        label: "Custom",
        template: "{start} {title}",
    },
];

/// Look up a built-in format by id (case-insensitive)
pub fn find_format(id: &str) -> Option<&'static FormatOption> {
    FORMAT_OPTIONS
        .iter()
        .find(|option| option.id.eq_ignore_ascii_case(id.trim()))
}

/// Documentation entry for a template token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenOption {
    pub token: &'static str,
    pub description: &'static str,
}

/// Tokens advertised to users. Compatibility aliases are resolved but not listed.
pub const TOKEN_OPTIONS: &[TokenOption] = &[
    TokenOption {
        token: "{start}",
        description: "Track start time (HH:MM:SS)",
    },
    TokenOption {
        token: "{start_seconds}",
        description: "Track start time as total seconds",
    },
    TokenOption {
        token: "{title}",
        description: "Track title",
    },
    TokenOption {
        token: "{artist}",
        description: "Track performer/artist",
    },
    TokenOption {
        token: "{track_no}",
        description: "Track number (1, 2, 3...)",
    },
    TokenOption {
        token: "{track_no_padded}",
        description: "Track number padded (01, 02, 03...)",
    },
];
