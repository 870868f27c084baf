//! Classification of individual cue sheet lines

/// What a single cue line means to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueLine<'a> {
    /// `TRACK <digits> AUDIO`
    TrackHeader,
    /// `TITLE "<text>"`
    Title(&'a str),
    /// `PERFORMER "<text>"`
    Performer(&'a str),
    /// `INDEX 01 <HH:MM:SS>`
    Index01(&'a str),
    /// Anything else, including other INDEX numbers
    Other,
}

/// Classify a line. Keywords are case-insensitive and the line must
/// consist of the keyword and its arguments only.
pub fn classify(line: &str) -> CueLine<'_> {
    let Some((keyword, rest)) = line.trim().split_once(char::is_whitespace) else {
        return CueLine::Other;
    };
    let rest = rest.trim_start();

    if keyword.eq_ignore_ascii_case("TRACK") {
        if is_audio_track_header(rest) {
            return CueLine::TrackHeader;
        }
    } else if keyword.eq_ignore_ascii_case("TITLE") {
        if let Some(value) = quoted_value(rest) {
            return CueLine::Title(value);
        }
    } else if keyword.eq_ignore_ascii_case("PERFORMER") {
        if let Some(value) = quoted_value(rest) {
            return CueLine::Performer(value);
        }
    } else if keyword.eq_ignore_ascii_case("INDEX") {
        if let Some(timecode) = index_01_timecode(rest) {
            return CueLine::Index01(timecode);
        }
    }

    CueLine::Other
}

fn is_audio_track_header(rest: &str) -> bool {
    let mut parts = rest.split_whitespace();
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(number), Some(kind), None)
            if is_digits(number) && kind.eq_ignore_ascii_case("AUDIO")
    )
}

/// Everything between the first and the last double quote, at least one character
fn quoted_value(rest: &str) -> Option<&str> {
    let inner = rest.strip_prefix('"')?.strip_suffix('"')?;
    (!inner.is_empty()).then_some(inner)
}

fn index_01_timecode(rest: &str) -> Option<&str> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("01"), Some(timecode), None) if is_index_timecode(timecode) => Some(timecode),
        _ => None,
    }
}

/// Exactly `DD:DD:DD`
fn is_index_timecode(value: &str) -> bool {
    let fields: Vec<&str> = value.split(':').collect();
    fields.len() == 3 && fields.iter().all(|f| f.len() == 2 && is_digits(f))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
