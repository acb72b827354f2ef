use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse one upstream timestamp into a UTC instant.
///
/// Accepted forms, tried in order:
/// 1. RFC 3339 ("2024-01-01T00:00:00Z", offsets honored and converted to UTC)
/// 2. Naive "2024-01-01T00:00:00" with optional fractional seconds, taken as
///    UTC — this is what the upstream actually serves
/// 3. The space-separated variant "2024-01-01 00:00:00"
///
/// Returns None for anything else. Unparseable timestamps are a data-quality
/// condition handled by the filter stage, not an error.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-01-01T02:00:00Z").unwrap();
        assert_eq!(dt.hour(), 2);
    }

    #[test]
    fn test_parse_rfc3339_offset_converts_to_utc() {
        let dt = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let dt = parse_timestamp("2024-01-01T02:00:00").unwrap();
        assert_eq!(dt.hour(), 2);
        // Fractional seconds, as the upstream sometimes serves.
        assert!(parse_timestamp("2024-01-01T02:00:00.123").is_some());
    }

    #[test]
    fn test_parse_space_separated() {
        assert!(parse_timestamp("2024-01-01 02:00:00").is_some());
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2024-13-99T99:99:99"), None);
    }
}
