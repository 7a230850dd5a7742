use crate::config::AppConfig;
use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntries;
use crate::modules::time_entries::core::range::BoundaryFormat;
use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::modules::time_entries::use_cases::find_overlaps::handler::FindOverlapsHandler;
use crate::modules::time_entries::use_cases::time_entries_report::handler::TimeEntriesReportHandler;
use crate::modules::time_entries::use_cases::total_duration::handler::TotalDurationHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateTimeEntryHandler<InMemoryTimeEntries>>,
    pub total_duration_handler: Arc<TotalDurationHandler<InMemoryTimeEntries>>,
    pub report_handler: Arc<TimeEntriesReportHandler<InMemoryTimeEntries>>,
    pub overlaps_handler: Arc<FindOverlapsHandler<InMemoryTimeEntries>>,
    pub boundary_format: BoundaryFormat,
}

impl AppState {
    pub fn new(repository: Arc<InMemoryTimeEntries>, config: &AppConfig) -> Self {
        Self {
            create_handler: Arc::new(CreateTimeEntryHandler::new(repository.clone())),
            total_duration_handler: Arc::new(TotalDurationHandler::new(repository.clone(), config.calendar)),
            report_handler: Arc::new(TimeEntriesReportHandler::new(repository.clone())),
            overlaps_handler: Arc::new(FindOverlapsHandler::new(repository)),
            boundary_format: config.boundary_format,
        }
    }
}
