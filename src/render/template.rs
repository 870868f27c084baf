//! Template tokenizer
//!
//! A placeholder is `{` followed by one or more of `[a-z_]` and `}`.
//! Everything else, including malformed braces, is literal text.

/// A span of a tokenized template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// Placeholder name without braces
    Placeholder(&'a str),
}

impl<'a> Segment<'a> {
    /// The segment exactly as written in the template
    pub fn source(&self) -> String {
        match self {
            Segment::Literal(text) => (*text).to_string(),
            Segment::Placeholder(name) => format!("{{{}}}", name),
        }
    }
}

/// Split a template into literal and placeholder spans
pub fn tokenize(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find('{') {
        let open = cursor + found;
        let name_start = open + 1;
        let name_len = template[name_start..]
            .bytes()
            .take_while(|b| b.is_ascii_lowercase() || *b == b'_')
            .count();
        let close = name_start + name_len;

        if name_len > 0 && template[close..].starts_with('}') {
            if literal_start < open {
                segments.push(Segment::Literal(&template[literal_start..open]));
            }
            segments.push(Segment::Placeholder(&template[name_start..close]));
            cursor = close + 1;
            literal_start = cursor;
        } else {
            cursor = name_start;
        }
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }

    segments
}
