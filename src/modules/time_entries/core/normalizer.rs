// Time normalizer: conversions between zoned timestamps and canonical instants.
//
// Purpose
// - Storage and comparisons only ever see UTC instants.
// - Callers only ever see timestamps in the zone they asked for.
//
// Boundaries
// - Pure functions. No clock, no I/O, no shared state.

use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::zone::Zone;
use crate::modules::time_entries::core::zoned_timestamp::ZonedTimestamp;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

/// Upper bound when searching for the end of a skipped local interval.
const MAX_GAP_MINUTES: i64 = 24 * 60;

pub fn to_canonical(zoned: &ZonedTimestamp) -> DateTime<Utc> {
    zoned.instant()
}

pub fn to_local(instant: DateTime<Utc>, zone: Zone) -> ZonedTimestamp {
    ZonedTimestamp::from_instant(instant, zone)
}

pub fn parse_zone(text: &str) -> Result<Zone, TimeEntryError> {
    text.parse()
}

/// Maps a wall-clock time in `zone` to an instant.
///
/// Ambiguous times resolve to the earlier instant. Skipped times resolve to
/// the first valid local time after the gap, which is the transition itself.
/// Times within a day of chrono's representable range are rejected.
pub fn resolve_local(local: NaiveDateTime, zone: Zone) -> Result<DateTime<Utc>, TimeEntryError> {
    let representable = local
        .checked_sub_signed(Duration::days(1))
        .and_then(|_| local.checked_add_signed(Duration::days(1)))
        .is_some();
    if !representable {
        return Err(TimeEntryError::InvalidDate(format!("{local} is out of the supported range")));
    }

    match zone.from_local(&local) {
        LocalResult::Single(resolved) => Ok(resolved.with_timezone(&Utc)),
        LocalResult::Ambiguous(first, second) => Ok(first.min(second).with_timezone(&Utc)),
        LocalResult::None => end_of_gap(local, zone),
    }
}

/// The transition instant that ends the gap `local` falls in.
///
/// The first valid whole minute bounds it from above, the same wall-clock time
/// read in the later offset bounds it from below. Transitions need not fall on
/// a minute, so the window is bisected down to the nanosecond.
fn end_of_gap(local: NaiveDateTime, zone: Zone) -> Result<DateTime<Utc>, TimeEntryError> {
    let missing = || TimeEntryError::InvalidDate(format!("{local} does not exist in {zone}"));
    let reaches_local = |instant: DateTime<Utc>| to_local(instant, zone).naive_local() >= local;

    let mut candidate = local
        .with_nanosecond(0)
        .and_then(|candidate| candidate.with_second(0))
        .unwrap_or(local);
    let mut after = None;
    for _ in 0..MAX_GAP_MINUTES {
        candidate += Duration::minutes(1);
        if let Some(resolved) = zone.from_local(&candidate).earliest() {
            after = Some(resolved.with_timezone(&Utc));
            break;
        }
    }
    let mut after = after.ok_or_else(missing)?;

    let offset_after = Duration::seconds(i64::from(zone.offset_at(&after).local_minus_utc()));
    let mut before = local.checked_sub_signed(offset_after).ok_or_else(missing)?.and_utc();
    if reaches_local(before) {
        return Err(missing());
    }

    while let Some(window) = (after - before).num_nanoseconds().filter(|nanos| *nanos > 1) {
        let middle = before + Duration::nanoseconds(window / 2);
        if reaches_local(middle) {
            after = middle;
        } else {
            before = middle;
        }
    }
    Ok(after)
}

/// First instant of `date` in `zone`.
pub fn start_of_day(date: NaiveDate, zone: Zone) -> Result<DateTime<Utc>, TimeEntryError> {
    resolve_local(date.and_time(NaiveTime::MIN), zone)
}
