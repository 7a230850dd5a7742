use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::range::CanonicalRange;
use crate::modules::time_entries::core::time_entry_view::TimeEntryView;
use crate::modules::time_entries::core::zone::Zone;
use std::sync::Arc;

pub struct TimeEntriesReportHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> TimeEntriesReportHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Entries starting inside `range`, in the order storage returns them.
    pub async fn handle(
        &self,
        employee_id: i64,
        range: CanonicalRange,
        zone: Zone,
    ) -> Result<Vec<TimeEntryView>, TimeEntryError> {
        let entries = self
            .repository
            .find_by_employee_and_start_between(employee_id, range.start, range.end)
            .await?;
        tracing::debug!(employee_id, count = entries.len(), "time entries report");
        Ok(entries
            .into_iter()
            .map(|entry| TimeEntryView::render(entry, zone))
            .collect())
    }
}
