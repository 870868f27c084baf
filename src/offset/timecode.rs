//! Timecode conversion between `HH:MM:SS` / `MM:SS` text and seconds

/// Convert `HH:MM:SS` or `MM:SS` to total seconds.
///
/// Fields must be non-empty ASCII digits; values are not range-checked,
/// so `00:75` is 75 seconds.
pub fn timecode_to_seconds(timecode: &str) -> Option<u64> {
    let fields = timecode
        .split(':')
        .map(parse_field)
        .collect::<Option<Vec<u64>>>()?;

    match fields.as_slice() {
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(*seconds),
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(*seconds),
        _ => None,
    }
}

/// Format seconds as zero-padded `HH:MM:SS`. Negative values floor at zero.
pub fn format_seconds(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn parse_field(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_field_timecode() {
        assert_eq!(timecode_to_seconds("00:00:00"), Some(0));
        assert_eq!(timecode_to_seconds("00:01:30"), Some(90));
        assert_eq!(timecode_to_seconds("01:02:03"), Some(3723));
    }

    #[test]
    fn test_two_field_timecode() {
        assert_eq!(timecode_to_seconds("01:00"), Some(60));
        assert_eq!(timecode_to_seconds("00:30"), Some(30));
        assert_eq!(timecode_to_seconds("00:75"), Some(75));
    }

    #[test]
    fn test_malformed_timecode() {
        assert_eq!(timecode_to_seconds(""), None);
        assert_eq!(timecode_to_seconds("90"), None);
        assert_eq!(timecode_to_seconds("1::2"), None);
        assert_eq!(timecode_to_seconds("1:2:3:4"), None);
        assert_eq!(timecode_to_seconds("00:1.5"), None);
        assert_eq!(timecode_to_seconds("-1:00"), None);
        assert_eq!(timecode_to_seconds("ab:cd"), None);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "00:00:00");
        assert_eq!(format_seconds(95), "00:01:35");
        assert_eq!(format_seconds(3723), "01:02:03");
        assert_eq!(format_seconds(-10), "00:00:00");
        assert_eq!(format_seconds(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_round_trip_preserves_padded_timecode() {
        for timecode in ["00:00:00", "00:00:59", "00:59:59", "01:00:00", "23:45:06", "99:59:59"] {
            let seconds = timecode_to_seconds(timecode).unwrap();
            assert_eq!(format_seconds(seconds as i64), timecode);
        }
    }
}
