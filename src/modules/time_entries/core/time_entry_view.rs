// Read projection of a time entry, rendered in the zone a request asked for.
//
// The zone is a property of the response, not of the entry: the same stored
// entry renders differently for callers in different zones.

use crate::modules::time_entries::core::normalizer::{to_canonical, to_local};
use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::modules::time_entries::core::zone::Zone;
use crate::modules::time_entries::core::zoned_timestamp::ZonedTimestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryView {
    pub id: Option<i64>,
    pub employee_id: i64,
    pub project_id: i64,
    pub start_time: ZonedTimestamp,
    pub end_time: ZonedTimestamp,
    #[serde(default)]
    pub description: String,
    pub user_time_zone: Zone,
}

impl TimeEntryView {
    pub fn render(entry: TimeEntry, zone: Zone) -> Self {
        Self {
            id: Some(entry.id),
            employee_id: entry.employee_id,
            project_id: entry.project_id,
            start_time: to_local(entry.start_time, zone),
            end_time: to_local(entry.end_time, zone),
            description: entry.description,
            user_time_zone: zone,
        }
    }

    pub fn to_new_entry(&self) -> NewTimeEntry {
        NewTimeEntry {
            employee_id: self.employee_id,
            project_id: self.project_id,
            start_time: to_canonical(&self.start_time),
            end_time: to_canonical(&self.end_time),
            description: self.description.clone(),
        }
    }
}
