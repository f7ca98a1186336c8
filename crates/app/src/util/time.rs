use chrono::{FixedOffset, NaiveDate, SecondsFormat, TimeZone, Utc};
use fleet_core::schedule::{REPORTING_YEARS, is_reporting_year, parse_in_zone};
use fleet_core::{DateWindow, TimeRange};

use crate::error::{AppError, Result};

/// Accepts any timestamp shape the schedule parser understands and stores it
/// as UTC RFC 3339 with millisecond precision. Zone-less input is read in `tz`.
pub fn normalize_timestamp(value: &str, tz: &FixedOffset) -> Result<String> {
    let parsed = parse_in_zone(value, tz)
        .ok_or_else(|| AppError::InvalidInput(format!("invalid datetime: {}", value)))?;
    Ok(parsed
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn parse_day(value: &str) -> Result<NaiveDate> {
    let day = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| AppError::InvalidInput(format!("invalid date {}: {}", value, err)))?;
    if !is_reporting_year(day) {
        return Err(AppError::InvalidInput(format!(
            "date {} is outside years {}..={}",
            value,
            REPORTING_YEARS.start(),
            REPORTING_YEARS.end()
        )));
    }
    Ok(day)
}

pub fn today_in(tz: &FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

pub fn day_start_utc(day: NaiveDate, tz: &FixedOffset) -> Result<String> {
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).single())
        .ok_or_else(|| AppError::InvalidInput(format!("invalid local date {}", day)))?;
    Ok(midnight
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// UTC bounds covering the whole days of `window` in `tz`.
pub fn window_range(window: &DateWindow, tz: &FixedOffset) -> Result<TimeRange> {
    Ok(TimeRange {
        start: day_start_utc(window.start, tz)?,
        end: day_start_utc(window.end, tz)?,
    })
}
