// Canonical half-open ranges and the two ways callers describe their bounds.

use crate::modules::time_entries::core::bucket::parse_reference_date;
use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::normalizer::{start_of_day, to_canonical};
use crate::modules::time_entries::core::zone::Zone;
use crate::modules::time_entries::core::zoned_timestamp::ZonedTimestamp;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CanonicalRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Intervals that only touch an endpoint do not overlap.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end && end > self.start
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }
}

/// How `from`/`to` (or `start`/`end`) query values are written by a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryFormat {
    /// `yyyy-MM-dd`, the upper date is inclusive.
    #[default]
    CalendarDate,
    /// A full zoned timestamp, the upper instant is exclusive.
    ZonedInstant,
}

impl BoundaryFormat {
    pub fn parse(self, text: &str) -> Result<RangeBoundary, TimeEntryError> {
        match self {
            BoundaryFormat::CalendarDate => parse_reference_date(text).map(RangeBoundary::CalendarDate),
            BoundaryFormat::ZonedInstant => text.parse().map(RangeBoundary::ZonedInstant),
        }
    }

    pub fn parse_range(self, from: &str, to: &str, zone: Zone) -> Result<CanonicalRange, TimeEntryError> {
        let from = self.parse(from)?;
        let to = self.parse(to)?;
        Ok(CanonicalRange::new(from.lower_bound(zone)?, to.upper_bound(zone)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBoundary {
    CalendarDate(NaiveDate),
    ZonedInstant(ZonedTimestamp),
}

impl RangeBoundary {
    pub fn lower_bound(&self, zone: Zone) -> Result<DateTime<Utc>, TimeEntryError> {
        match self {
            RangeBoundary::CalendarDate(date) => start_of_day(*date, zone),
            RangeBoundary::ZonedInstant(zoned) => Ok(to_canonical(zoned)),
        }
    }

    pub fn upper_bound(&self, zone: Zone) -> Result<DateTime<Utc>, TimeEntryError> {
        match self {
            RangeBoundary::CalendarDate(date) => {
                let next = date
                    .succ_opt()
                    .ok_or_else(|| TimeEntryError::InvalidDate(format!("{date} has no following day")))?;
                start_of_day(next, zone)
            }
            RangeBoundary::ZonedInstant(zoned) => Ok(to_canonical(zoned)),
        }
    }
}
