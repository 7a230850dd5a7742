// Zone identifiers accepted at the system boundary.
//
// Purpose
// - Name the zone a caller reads and writes local timestamps in.
//
// Responsibilities
// - Parse IANA names (through chrono-tz) and fixed UTC offsets.
// - Answer the two questions the normalizer needs: the offset in effect at an
//   instant, and the instants a local wall-clock time maps to.

use crate::modules::time_entries::core::errors::TimeEntryError;
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Offsets beyond +/-18:00 are rejected, matching ISO-8601 zone offsets.
const MAX_OFFSET_HOURS: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    pub const UTC: Zone = Zone::Named(Tz::UTC);

    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    pub fn from_local(&self, local: &NaiveDateTime) -> LocalResult<DateTime<FixedOffset>> {
        match self {
            Zone::Named(tz) => tz.from_local_datetime(local).map(|dt| dt.fixed_offset()),
            Zone::Fixed(offset) => offset.from_local_datetime(local),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => {
                let seconds = offset.local_minus_utc();
                if seconds == 0 {
                    return f.write_str("Z");
                }
                let sign = if seconds < 0 { '-' } else { '+' };
                let seconds = seconds.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
            }
        }
    }
}

impl FromStr for Zone {
    type Err = TimeEntryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed == "Z" {
            return Ok(Zone::Fixed(Utc.fix()));
        }
        if trimmed.starts_with(['+', '-']) {
            return parse_offset(trimmed)
                .map(Zone::Fixed)
                .ok_or_else(|| TimeEntryError::InvalidZone(text.to_string()));
        }
        for prefix in ["UTC", "GMT", "UT"] {
            match trimmed.strip_prefix(prefix) {
                Some(rest) if rest.starts_with(['+', '-']) => {
                    return parse_offset(rest)
                        .map(Zone::Fixed)
                        .ok_or_else(|| TimeEntryError::InvalidZone(text.to_string()));
                }
                _ => {}
            }
        }
        trimmed
            .parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| TimeEntryError::InvalidZone(text.to_string()))
    }
}

/// Accepts `+H`, `+HH`, `+HHMM` and `+HH:MM` (and the `-` forms).
fn parse_offset(text: &str) -> Option<FixedOffset> {
    let (sign, digits) = match text.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let (hours, minutes) = match digits.split_once(':') {
        Some((hours, minutes)) if minutes.len() == 2 => (hours, minutes),
        Some(_) => return None,
        None if digits.len() <= 2 => (digits, "0"),
        None if digits.len() == 4 => digits.split_at(2),
        None => return None,
    };
    let numeric = |part: &str| !part.is_empty() && part.len() <= 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !numeric(hours) || !numeric(minutes) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > MAX_OFFSET_HOURS || minutes >= 60 || (hours == MAX_OFFSET_HOURS && minutes > 0) {
        return None;
    }
    let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
    FixedOffset::east_opt(sign * seconds)
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
