// Stored entity. Instants only, the zone a caller used never reaches storage.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub project_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: String,
}

impl TimeEntry {
    /// Negative when the entry ends before it starts; not validated on create.
    pub fn worked(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// A time entry that storage has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub employee_id: i64,
    pub project_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: String,
}

impl NewTimeEntry {
    pub fn with_id(self, id: i64) -> TimeEntry {
        TimeEntry {
            id,
            employee_id: self.employee_id,
            project_id: self.project_id,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
        }
    }
}
