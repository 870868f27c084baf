//! Loading cue sheet text from files or stdin

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

/// Whether the path has a `.cue` extension (any case)
pub fn is_cue_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cue"))
}

/// Read a `.cue` file. Other extensions are rejected before any I/O.
pub fn load_cue_file(path: &Path) -> Result<String> {
    if !is_cue_file(path) {
        bail!("Please use a .cue file: {:?}", path);
    }

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read cue file: {:?}", path))?;

    log::debug!("Read {} bytes from {:?}", bytes.len(), path);
    Ok(decode(bytes))
}

/// Read cue sheet text from stdin
pub fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read cue sheet from stdin")?;
    Ok(decode(bytes))
}

/// Decode as UTF-8 (dropping a BOM), replacing invalid sequences
fn decode(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("Cue sheet is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_cue_file() {
        assert!(is_cue_file(&PathBuf::from("set.cue")));
        assert!(is_cue_file(&PathBuf::from("/music/SET.CUE")));
        assert!(!is_cue_file(&PathBuf::from("set.txt")));
        assert!(!is_cue_file(&PathBuf::from("cue")));
    }

    #[test]
    fn test_decode_strips_bom_and_replaces_invalid_bytes() {
        assert_eq!(decode(b"\xef\xbb\xbfTRACK 01 AUDIO".to_vec()), "TRACK 01 AUDIO");
        assert_eq!(decode(b"TITLE \"a\xffb\"".to_vec()), "TITLE \"a\u{fffd}b\"");
    }
}
