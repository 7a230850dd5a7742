use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::Duration;

/// Entries count in full, nothing is clipped to the bucket they started in.
pub fn total_worked(entries: &[TimeEntry]) -> Duration {
    entries.iter().map(TimeEntry::worked).fold(Duration::zero(), |total, worked| total + worked)
}

/// Whole hours and remaining whole minutes. Seconds are truncated.
pub fn format_total(total: Duration) -> String {
    let hours = total.num_hours();
    let minutes = (total - Duration::hours(hours)).num_minutes();
    format!("Total worked hours: {hours} hours {minutes} minutes")
}
