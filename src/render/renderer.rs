//! Rendering of track records through a template

use super::cleanup::{is_blank, tidy, trim_only};
use super::template::{tokenize, Segment};
use super::tokens::TokenValues;
use crate::model::TrackRecord;

/// Connector words dropped when everything after them rendered empty
const DANGLING_CONNECTORS: &[&str] = &["by", "-"];

/// Render one track at 0-based `position` through `template`.
///
/// Unknown tokens stay in the output verbatim. Templates containing a
/// comma are treated as CSV and only trimmed; anything else gets the
/// cosmetic cleanup.
pub fn render(track: &TrackRecord, position: usize, template: &str) -> String {
    let values = TokenValues::new(track, position);
    let segments = tokenize(template);
    let csv = template.contains(',');

    let connector_at = if csv {
        None
    } else {
        dangling_connector(&segments, &values)
    };

    let mut rendered = String::with_capacity(template.len() + 32);
    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => match connector_at {
                Some((at, keep)) if at == index => rendered.push_str(&text[..keep]),
                _ => rendered.push_str(text),
            },
            Segment::Placeholder(name) => match values.resolve(name) {
                Some(value) => rendered.push_str(value),
                None => rendered.push_str(&segment.source()),
            },
        }
    }

    if csv {
        trim_only(&rendered)
    } else {
        tidy(&rendered)
    }
}

/// Render every track, one line each, joined with `\n`
pub fn render_all(tracks: &[TrackRecord], template: &str) -> String {
    tracks
        .iter()
        .enumerate()
        .map(|(position, track)| render(track, position, template))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find a literal ending in a connector word whose following segments all
/// rendered empty. Returns the literal's index and how many bytes to keep.
fn dangling_connector(segments: &[Segment<'_>], values: &TokenValues<'_>) -> Option<(usize, usize)> {
    let mut saw_empty_value = false;

    for (index, segment) in segments.iter().enumerate().rev() {
        match segment {
            Segment::Placeholder(name) if values.resolve(name) == Some("") => {
                saw_empty_value = true;
            }
            Segment::Literal(text) if is_blank(text) => {}
            Segment::Literal(text) if saw_empty_value => {
                return connector_cut(text).map(|keep| (index, keep));
            }
            _ => return None,
        }
    }

    None
}

/// Byte length of `text` without its trailing connector word, if it has one
/// preceded by whitespace
fn connector_cut(text: &str) -> Option<usize> {
    let trimmed = text.trim_end();

    DANGLING_CONNECTORS.iter().find_map(|connector| {
        let split = trimmed.len().checked_sub(connector.len())?;
        let tail = trimmed.get(split..)?;
        if !tail.eq_ignore_ascii_case(connector) {
            return None;
        }
        let head = &trimmed[..split];
        head.ends_with(char::is_whitespace).then_some(split)
    })
}
