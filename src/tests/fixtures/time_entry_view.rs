// Shared test fixture for time entry views.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::time_entries::core::time_entry_view::TimeEntryView;
use crate::modules::time_entries::core::zone::Zone;
use crate::modules::time_entries::core::zoned_timestamp::ZonedTimestamp;

pub const EMPLOYEE_ID: i64 = 7;
pub const PROJECT_ID: i64 = 3;
pub const ZONE_ID: &str = "America/New_York";

pub fn zoned(text: &str) -> ZonedTimestamp {
    text.parse().expect("fixture timestamp must parse")
}

pub struct TimeEntryViewBuilder {
    inner: TimeEntryView,
}

impl Default for TimeEntryViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryViewBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntryView {
                id: None,
                employee_id: EMPLOYEE_ID,
                project_id: PROJECT_ID,
                start_time: zoned("2024-03-11T09:00:00-04:00[America/New_York]"),
                end_time: zoned("2024-03-11T10:30:00-04:00[America/New_York]"),
                description: "Sprint planning".to_string(),
                user_time_zone: ZONE_ID.parse().expect("fixture zone must parse"),
            },
        }
    }

    pub fn employee_id(mut self, v: i64) -> Self {
        self.inner.employee_id = v;
        self
    }

    pub fn project_id(mut self, v: i64) -> Self {
        self.inner.project_id = v;
        self
    }

    pub fn start_time(mut self, v: &str) -> Self {
        self.inner.start_time = zoned(v);
        self
    }

    pub fn end_time(mut self, v: &str) -> Self {
        self.inner.end_time = zoned(v);
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn user_time_zone(mut self, v: &str) -> Self {
        self.inner.user_time_zone = v.parse::<Zone>().expect("fixture zone must parse");
        self
    }

    pub fn build(self) -> TimeEntryView {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_view_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = TimeEntryViewBuilder::default().build();
        assert_eq!(built.id, None);
        assert_eq!(built.employee_id, EMPLOYEE_ID);
        assert_eq!(built.project_id, PROJECT_ID);
        assert_eq!(built.user_time_zone.to_string(), ZONE_ID);
        assert_eq!(built.description, "Sprint planning");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = TimeEntryViewBuilder::new()
            .employee_id(11)
            .project_id(12)
            .start_time("2024-05-01T08:00:00+02:00[Europe/Amsterdam]")
            .end_time("2024-05-01T12:00:00+02:00[Europe/Amsterdam]")
            .description("Review")
            .user_time_zone("Europe/Amsterdam")
            .build();

        assert_eq!(custom.employee_id, 11);
        assert_eq!(custom.project_id, 12);
        assert_eq!(custom.start_time.to_string(), "2024-05-01T08:00:00+02:00[Europe/Amsterdam]");
        assert_eq!(custom.end_time.to_string(), "2024-05-01T12:00:00+02:00[Europe/Amsterdam]");
        assert_eq!(custom.description, "Review");
        assert_eq!(custom.user_time_zone.to_string(), "Europe/Amsterdam");
    }
}
