//! minute-of-day normalization for the schedule feed. the feed encodes departure
//! and arrival times as integer minute offsets from midnight on the flight date;
//! these are converted into canonical `YYYY-MM-DDTHH:MM` timestamps before merge.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const MINUTES_PER_DAY: i32 = 1440;

/// canonical timestamp format carried on flight edges and used in query bounds.
pub const SCHEDULE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(thiserror::Error, Debug)]
pub enum TimeError {
    #[error("minute-of-day {0} outside valid range [0, 1439]")]
    MinuteOutOfRange(i32),
}

/// converts a minute-of-day offset into a time. values outside [0, 1439] are
/// rejected here, before any graph write, rather than wrapped around midnight.
pub fn minute_to_time(minute: i32) -> Result<NaiveTime, TimeError> {
    if !(0..MINUTES_PER_DAY).contains(&minute) {
        return Err(TimeError::MinuteOutOfRange(minute));
    }
    NaiveTime::from_hms_opt((minute / 60) as u32, (minute % 60) as u32, 0)
        .ok_or(TimeError::MinuteOutOfRange(minute))
}

/// combines a flight date with a minute-of-day offset into a timestamp.
pub fn timestamp(date: NaiveDate, minute: i32) -> Result<NaiveDateTime, TimeError> {
    Ok(date.and_time(minute_to_time(minute)?))
}

/// renders a timestamp in the canonical zero-padded `YYYY-MM-DDTHH:MM` form.
pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(SCHEDULE_TIME_FORMAT).to_string()
}

pub mod schedule_time_format {
    //! serde codec for the canonical schedule timestamp form, used for graph
    //! file round-trips of flight edge departure and arrival times.
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(t: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(t))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let time_str: String = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&time_str, super::SCHEDULE_TIME_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid timestamp format: {e}")))
    }
}
