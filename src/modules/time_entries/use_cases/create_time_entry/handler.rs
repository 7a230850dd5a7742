use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry_view::TimeEntryView;
use std::sync::Arc;

pub struct CreateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Stores the entry in UTC and answers with what storage now holds,
    /// rendered back in the caller's zone.
    pub async fn handle(&self, view: TimeEntryView) -> Result<TimeEntryView, TimeEntryError> {
        let stored = self.repository.insert(view.to_new_entry()).await?;
        tracing::info!(
            id = stored.id,
            employee_id = stored.employee_id,
            project_id = stored.project_id,
            "time entry created"
        );
        Ok(TimeEntryView::render(stored, view.user_time_zone))
    }
}
