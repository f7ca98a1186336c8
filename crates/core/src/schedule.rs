//! Calendar and chart bucketing of maintenance events.
//!
//! Everything here is a pure function of its inputs. Dates are compared as
//! calendar days in the aggregator's time zone; `start_date` is the only
//! timestamp that matters.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::MaintenanceEvent;

/// Years the aggregator reports on. Reference dates outside are clamped into
/// it and timestamps outside it count as unparseable. The upper bound keeps
/// window ends and UTC conversions within four-digit years.
pub const REPORTING_YEARS: RangeInclusive<i32> = 1..=9998;

pub fn is_reporting_year(day: NaiveDate) -> bool {
    REPORTING_YEARS.contains(&day.year())
}

fn clamp_reference(day: NaiveDate) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(*REPORTING_YEARS.start(), 1, 1);
    let last = NaiveDate::from_ymd_opt(*REPORTING_YEARS.end(), 12, 31);
    match (first, last) {
        (Some(first), Some(last)) => day.clamp(first, last),
        _ => day,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Week,
    Month,
    Year,
}

impl Granularity {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn bucket_count(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 5,
            Self::Year => 12,
        }
    }

    /// Reporting window anchored at `reference`, as whole days.
    pub fn window(self, reference: NaiveDate) -> DateWindow {
        let reference = clamp_reference(reference);
        match self {
            Self::Week => DateWindow {
                start: reference - Duration::days(6),
                end: reference + Duration::days(1),
            },
            Self::Month => {
                let start = first_of_month(reference);
                DateWindow {
                    start,
                    end: first_of_next_month(start),
                }
            }
            Self::Year => {
                let start = first_of_year(reference);
                DateWindow {
                    start,
                    end: first_of_year(start + Duration::days(366)),
                }
            }
        }
    }

    fn buckets(self, reference: NaiveDate) -> Vec<ReportingBucket> {
        let reference = clamp_reference(reference);
        match self {
            Self::Week => {
                let window = self.window(reference);
                (0..7)
                    .map(|offset| {
                        let day = window.start + Duration::days(offset);
                        ReportingBucket::empty(
                            day.format("%a").to_string(),
                            day,
                            day + Duration::days(1),
                        )
                    })
                    .collect()
            }
            Self::Month => {
                let window = self.window(reference);
                (0..5)
                    .map(|index| {
                        // The fifth week starts on the 29th even when the month is shorter.
                        let start = (window.start + Duration::days(index * 7)).min(window.end);
                        let end = (start + Duration::days(7)).min(window.end);
                        ReportingBucket::empty(format!("Week {}", index + 1), start, end)
                    })
                    .collect()
            }
            Self::Year => {
                let mut month = first_of_year(reference);
                let mut buckets = Vec::with_capacity(12);
                for _ in 0..12 {
                    let next = first_of_next_month(month);
                    buckets.push(ReportingBucket::empty(
                        month.format("%b").to_string(),
                        month,
                        next,
                    ));
                    month = next;
                }
                buckets
            }
        }
    }
}

/// Half-open range of calendar days `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingBucket {
    pub label: String,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub count: u64,
}

impl ReportingBucket {
    fn empty(label: String, range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            label,
            range_start,
            range_end,
            count: 0,
        }
    }

    pub fn range(&self) -> DateWindow {
        DateWindow {
            start: self.range_start,
            end: self.range_end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketReport {
    pub granularity: Granularity,
    pub window: DateWindow,
    pub buckets: Vec<ReportingBucket>,
    /// Events dropped because their `start_date` could not be parsed.
    pub skipped: u64,
}

impl BucketReport {
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<MaintenanceEvent>,
}

#[derive(Debug, Clone)]
pub struct MaintenanceScheduleAggregator<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> MaintenanceScheduleAggregator<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Start instant of `event` in the aggregator's zone, if it parses.
    pub fn start_instant(&self, event: &MaintenanceEvent) -> Option<DateTime<Tz>> {
        parse_in_zone(&event.start_date, &self.tz)
    }

    pub fn start_day(&self, event: &MaintenanceEvent) -> Option<NaiveDate> {
        self.start_instant(event).map(|instant| instant.date_naive())
    }

    pub fn bucketize(
        &self,
        events: &[MaintenanceEvent],
        reference: NaiveDate,
        granularity: Granularity,
    ) -> BucketReport {
        let window = granularity.window(reference);
        let mut buckets = granularity.buckets(reference);
        let mut skipped = 0u64;
        for event in events {
            let Some(day) = self.start_day(event) else {
                skipped += 1;
                continue;
            };
            if !window.contains(day) {
                continue;
            }
            if let Some(bucket) = buckets
                .iter_mut()
                .find(|bucket| bucket.range().contains(day))
            {
                bucket.count += 1;
            }
        }
        BucketReport {
            granularity,
            window,
            buckets,
            skipped,
        }
    }

    pub fn events_on_day<'a>(
        &self,
        events: &'a [MaintenanceEvent],
        day: NaiveDate,
    ) -> Vec<&'a MaintenanceEvent> {
        events
            .iter()
            .filter(|event| self.start_day(event) == Some(day))
            .collect()
    }

    /// Events starting in the anchor's month, ordered by start instant.
    pub fn events_in_month<'a>(
        &self,
        events: &'a [MaintenanceEvent],
        month_anchor: NaiveDate,
    ) -> Vec<&'a MaintenanceEvent> {
        let window = Granularity::Month.window(month_anchor);
        let mut matched: Vec<(DateTime<Tz>, &'a MaintenanceEvent)> = events
            .iter()
            .filter_map(|event| {
                let instant = self.start_instant(event)?;
                window
                    .contains(instant.date_naive())
                    .then_some((instant, event))
            })
            .collect();
        matched.sort_by(|a, b| a.0.cmp(&b.0));
        matched.into_iter().map(|(_, event)| event).collect()
    }

    pub fn month_grid(
        &self,
        events: &[MaintenanceEvent],
        month_anchor: NaiveDate,
    ) -> Vec<CalendarDay> {
        let window = Granularity::Month.window(month_anchor);
        let in_month: Vec<MaintenanceEvent> = self
            .events_in_month(events, month_anchor)
            .into_iter()
            .cloned()
            .collect();
        let mut days = Vec::new();
        let mut day = window.start;
        while day < window.end {
            days.push(CalendarDay {
                date: day,
                events: self
                    .events_on_day(&in_month, day)
                    .into_iter()
                    .cloned()
                    .collect(),
            });
            day += Duration::days(1);
        }
        days
    }
}

/// Parses RFC 3339, Postgres-style `YYYY-MM-DD HH:MM:SS+HH`, zone-less
/// timestamps and bare dates. Zone-less values are read as local to `tz`.
/// Years outside [`REPORTING_YEARS`] are rejected.
pub fn parse_in_zone<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return in_reporting_years(parsed.with_timezone(tz));
    }
    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return in_reporting_years(parsed.with_timezone(tz));
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    if !is_reporting_year(naive.date()) {
        return None;
    }
    tz.from_local_datetime(&naive).earliest()
}

fn in_reporting_years<Tz: TimeZone>(instant: DateTime<Tz>) -> Option<DateTime<Tz>> {
    is_reporting_year(instant.date_naive()).then_some(instant)
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.day0()))
}

fn first_of_next_month(day: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(day) + Duration::days(32))
}

fn first_of_year(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.ordinal0()))
}
