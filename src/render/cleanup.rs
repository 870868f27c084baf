//! Post-substitution cleanup of rendered lines

/// Whether cosmetic cleanup reduces `text` to nothing
pub(super) fn is_blank(text: &str) -> bool {
    remove_empty_parens(text).trim().is_empty()
}

/// Cleanup for CSV-style output: trim the ends, keep empty fields
pub fn trim_only(rendered: &str) -> String {
    rendered.trim().to_string()
}

/// Cosmetic cleanup for human-readable output.
///
/// Collapses whitespace runs, drops a trailing ` -`, removes empty `()`
/// groups and trims the result.
pub fn tidy(rendered: &str) -> String {
    let collapsed = collapse_whitespace(rendered);
    let without_hyphen = strip_dangling_hyphen(&collapsed);
    remove_empty_parens(without_hyphen).trim().to_string()
}

/// Replace every run of two or more whitespace characters with one space
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            run.push(ch);
            continue;
        }
        flush_whitespace(&mut out, &mut run);
        out.push(ch);
    }
    flush_whitespace(&mut out, &mut run);

    out
}

fn flush_whitespace(out: &mut String, run: &mut String) {
    if run.chars().nth(1).is_some() {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

/// Remove whitespace + `-` + optional whitespace at the end of the text
fn strip_dangling_hyphen(text: &str) -> &str {
    let Some(before) = text.trim_end().strip_suffix('-') else {
        return text;
    };
    let kept = before.trim_end();
    if kept.len() < before.len() {
        kept
    } else {
        text
    }
}

/// Remove `(` + optional whitespace + `)` groups
fn remove_empty_parens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let inner = after.trim_start();

        match inner.strip_prefix(')') {
            Some(remaining) => rest = remaining,
            None => {
                out.push('(');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}
