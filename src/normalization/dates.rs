use chrono::{DateTime, NaiveDate, NaiveDateTime};

// @module: Calendar fields derived from programme start timestamps

// XMLTV timestamps with a zone offset, most specific first
const ZONED_FORMATS: &[&str] = &["%Y%m%d%H%M%S %z", "%Y%m%d%H%M %z"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y%m%d%H%M%S",
    "%Y%m%d%H%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Calendar date of a start timestamp, as written in the source.
///
/// Zoned timestamps keep their own offset: the date is the one a viewer in
/// that zone would see, not a conversion to the machine's local time.
pub fn parse_start_date(start: &str) -> Option<NaiveDate> {
    let start = start.trim();
    if start.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(start) {
        return Some(datetime.date_naive());
    }
    for format in ZONED_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(start, format) {
            return Some(datetime.date_naive());
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(start, format) {
            return Some(datetime.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(start, format).ok())
}

/// Air date as MM/DD/YYYY, or "" when the timestamp is unusable
pub fn format_airdate(start: &str) -> String {
    parse_start_date(start)
        .map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

/// Four-digit year, or "" when the timestamp is unusable
pub fn format_year(start: &str) -> String {
    parse_start_date(start)
        .map(|date| date.format("%Y").to_string())
        .unwrap_or_default()
}
