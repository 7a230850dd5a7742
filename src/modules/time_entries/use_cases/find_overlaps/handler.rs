use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::range::CanonicalRange;
use crate::modules::time_entries::core::time_entry_view::TimeEntryView;
use crate::modules::time_entries::core::zone::Zone;
use std::sync::Arc;

pub struct FindOverlapsHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> FindOverlapsHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        employee_id: i64,
        range: CanonicalRange,
        zone: Zone,
    ) -> Result<Vec<TimeEntryView>, TimeEntryError> {
        let entries = self
            .repository
            .find_by_employee_overlapping(employee_id, range.end, range.start)
            .await?;
        tracing::debug!(employee_id, count = entries.len(), "overlapping time entries");
        Ok(entries
            .into_iter()
            .map(|entry| TimeEntryView::render(entry, zone))
            .collect())
    }
}
