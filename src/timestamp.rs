use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BookError;

/// Date/time shapes observed in iBooking responses. Offsets in RFC 3339
/// strings are dropped: the whole pipeline runs on local wall-clock time.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("regex compiles"));

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, BookError> {
    let text = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }
    Err(BookError::Timestamp(raw.to_string()))
}

/// Calendar date of a day header. Day headers are sometimes a bare date,
/// sometimes a full timestamp, sometimes prose with a date embedded in it.
pub fn parse_date(raw: &str) -> Result<NaiveDate, BookError> {
    let text = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date);
        }
    }
    if let Ok(dt) = parse_timestamp(text) {
        return Ok(dt.date());
    }
    if let Some(found) = ISO_DATE_RE.find(text)
        && let Ok(date) = NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d")
    {
        return Ok(date);
    }
    Err(BookError::Timestamp(raw.to_string()))
}

/// Start of the requested slot: today plus `days_from_now`, at `time`.
pub fn target_start(days_from_now: i64, time: NaiveTime) -> NaiveDateTime {
    let date = Local::now().date_naive() + Duration::days(days_from_now);
    NaiveDateTime::new(date, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2026-08-07T07:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2026-08-07 07:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2026-08-07 07:30").unwrap(), expected);
        assert_eq!(parse_timestamp("07.08.2026 07:30").unwrap(), expected);
    }

    #[test]
    fn test_parse_timestamp_drops_offset() {
        let parsed = parse_timestamp("2026-08-07T07:30:00+02:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 8, 7)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("whenever").unwrap_err();
        assert!(matches!(err, BookError::Timestamp(_)));
    }

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(parse_date("2026-08-07").unwrap(), expected);
        assert_eq!(parse_date("07.08.2026").unwrap(), expected);
        assert_eq!(parse_date("2026-08-07T00:00:00").unwrap(), expected);
        assert_eq!(parse_date("Friday, 2026-08-07").unwrap(), expected);
        assert!(parse_date("no date here").is_err());
    }

    #[test]
    fn test_target_start() {
        let time = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        let target = target_start(2, time);
        assert_eq!(target.date(), Local::now().date_naive() + Duration::days(2));
        assert_eq!(target.time(), time);
    }

    #[test]
    fn test_target_start_today() {
        let time = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
        assert_eq!(target_start(0, time).date(), Local::now().date_naive());
    }
}
