use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::normalizer::resolve_local;
use crate::modules::time_entries::core::zone::Zone;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A canonical instant shown in a zone.
///
/// The local date, time and offset are always derived from the instant and
/// the zone, so two timestamps are equal exactly when both agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedTimestamp {
    local: DateTime<FixedOffset>,
    zone: Zone,
}

impl ZonedTimestamp {
    pub fn from_instant(instant: DateTime<Utc>, zone: Zone) -> Self {
        Self {
            local: instant.with_timezone(&zone.offset_at(&instant)),
            zone,
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }

    pub fn local(&self) -> DateTime<FixedOffset> {
        self.local
    }

    pub fn naive_local(&self) -> NaiveDateTime {
        self.local.naive_local()
    }

    pub fn offset(&self) -> FixedOffset {
        *self.local.offset()
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }
}

impl fmt::Display for ZonedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone {
            Zone::Named(tz) => write!(
                f,
                "{}[{}]",
                self.local.to_rfc3339_opts(SecondsFormat::AutoSi, false),
                tz.name()
            ),
            Zone::Fixed(_) => f.write_str(&self.local.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

impl FromStr for ZonedTimestamp {
    type Err = TimeEntryError;

    /// Accepts `2024-03-10T09:00:00-04:00`, `2024-03-10T09:00:00-04:00[America/New_York]`
    /// and `2024-03-10T09:00:00[America/New_York]`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let (date_time, zone_id) = match trimmed.strip_suffix(']').and_then(|rest| rest.split_once('[')) {
            Some((date_time, zone_id)) => (date_time, Some(zone_id)),
            None => (trimmed, None),
        };
        let zone = zone_id.map(|id| id.parse::<Zone>()).transpose()?;

        if let Ok(parsed) = DateTime::parse_from_rfc3339(date_time) {
            let zone = zone.unwrap_or(Zone::Fixed(*parsed.offset()));
            return Ok(Self::from_instant(parsed.with_timezone(&Utc), zone));
        }

        let invalid = || TimeEntryError::InvalidDate(format!("{text:?}, expected an ISO-8601 zoned date-time"));
        let zone = zone.ok_or_else(invalid)?;
        let local = LOCAL_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(date_time, format).ok())
            .ok_or_else(invalid)?;
        resolve_local(local, zone).map(|instant| Self::from_instant(instant, zone))
    }
}

impl Serialize for ZonedTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZonedTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
