// Bucket boundaries for duration totals.
//
// Purpose
// - Turn a reference date, a zone and a bucket type into a canonical
//   half-open range [start, end).
//
// Responsibilities
// - Start boundaries are always local midnight in the caller's zone.
// - End boundaries follow a named policy per bucket type. The default week
//   end is start + 7 x 24h of canonical time, every other default re-derives
//   local midnight. Across a DST transition the two give different results.

use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::normalizer::start_of_day;
use crate::modules::time_entries::core::range::CanonicalRange;
use crate::modules::time_entries::core::zone::Zone;
use chrono::{Datelike, Days, Duration, Months, NaiveDate, Weekday};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketType {
    Day,
    Week,
    Month,
}

impl FromStr for BucketType {
    type Err = TimeEntryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_lowercase().as_str() {
            "day" => Ok(BucketType::Day),
            "week" => Ok(BucketType::Week),
            "month" => Ok(BucketType::Month),
            _ => Err(TimeEntryError::InvalidBucketType(text.to_string())),
        }
    }
}

/// First day of a week. Configured explicitly, never taken from the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    fn days_since(self, weekday: Weekday) -> u64 {
        let days = match self {
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Sunday => weekday.num_days_from_sunday(),
        };
        u64::from(days)
    }
}

/// How the end of a bucket is derived from its first local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Local midnight of the first day after the bucket.
    LocalMidnight,
    /// The bucket's nominal length added to the start instant in UTC.
    FixedSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarOptions {
    pub week_start: WeekStart,
    pub week_end: BoundaryPolicy,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            week_end: BoundaryPolicy::FixedSpan,
        }
    }
}

impl CalendarOptions {
    pub fn end_policy(&self, bucket: BucketType) -> BoundaryPolicy {
        match bucket {
            BucketType::Day | BucketType::Month => BoundaryPolicy::LocalMidnight,
            BucketType::Week => self.week_end,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Span {
    Days(u64),
    Months(u32),
}

pub fn parse_reference_date(text: &str) -> Result<NaiveDate, TimeEntryError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| TimeEntryError::InvalidDate(format!("{text:?}, expected format yyyy-MM-dd")))
}

pub fn compute_bucket(
    reference_date: NaiveDate,
    zone: Zone,
    bucket: BucketType,
    calendar: &CalendarOptions,
) -> Result<CanonicalRange, TimeEntryError> {
    let out_of_range = || TimeEntryError::InvalidDate(format!("{reference_date} is out of the supported range"));

    let (first_day, span) = match bucket {
        BucketType::Day => (reference_date, Span::Days(1)),
        BucketType::Week => {
            let days = calendar.week_start.days_since(reference_date.weekday());
            let first_day = reference_date.checked_sub_days(Days::new(days)).ok_or_else(out_of_range)?;
            (first_day, Span::Days(7))
        }
        BucketType::Month => (reference_date.with_day(1).ok_or_else(out_of_range)?, Span::Months(1)),
    };

    let start = start_of_day(first_day, zone)?;
    let end = match span {
        Span::Months(months) => {
            start_of_day(first_day.checked_add_months(Months::new(months)).ok_or_else(out_of_range)?, zone)?
        }
        Span::Days(days) => match calendar.end_policy(bucket) {
            BoundaryPolicy::LocalMidnight => {
                start_of_day(first_day.checked_add_days(Days::new(days)).ok_or_else(out_of_range)?, zone)?
            }
            BoundaryPolicy::FixedSpan => {
                let days = i64::try_from(days).map_err(|_| out_of_range())?;
                start.checked_add_signed(Duration::days(days)).ok_or_else(out_of_range)?
            }
        },
    };

    Ok(CanonicalRange::new(start, end))
}
