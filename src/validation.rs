use chrono::NaiveTime;
use config::ConfigError;

use crate::error::BookError;

/// Four-digit `HHMM` as taken by `--time`.
pub fn validate_time_of_day(value: &str) -> Result<NaiveTime, BookError> {
    let invalid = || BookError::Timestamp(value.to_string());
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hour: u32 = value[..2].parse().map_err(|_| invalid())?;
    let minute: u32 = value[2..].parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

pub fn validate_tries(value: u32) -> Result<u32, BookError> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(BookError::Config(ConfigError::Message(
            "max tries must be at least 1".into(),
        )))
    }
}
