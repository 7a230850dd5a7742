use crate::modules::time_entries::core::bucket::{BucketType, CalendarOptions, compute_bucket, parse_reference_date};
use crate::modules::time_entries::core::duration::{format_total, total_worked};
use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::normalizer::parse_zone;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::range::CanonicalRange;
use std::sync::Arc;

/// Raw bucket descriptor as it arrives from a caller.
#[derive(Debug, Clone)]
pub struct TotalDurationQuery {
    pub employee_id: i64,
    pub date: String,
    pub time_zone: String,
    pub bucket_type: String,
}

pub struct TotalDurationHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
    calendar: CalendarOptions,
}

impl<TRepository> TotalDurationHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, calendar: CalendarOptions) -> Self {
        Self { repository, calendar }
    }

    /// Every input is validated before storage is touched.
    pub async fn handle(&self, query: TotalDurationQuery) -> Result<String, TimeEntryError> {
        let zone = parse_zone(&query.time_zone)?;
        let reference_date = parse_reference_date(&query.date)?;
        let bucket: BucketType = query.bucket_type.parse()?;
        let range = compute_bucket(reference_date, zone, bucket, &self.calendar)?;
        tracing::debug!(
            employee_id = query.employee_id,
            ?bucket,
            start = %range.start,
            end = %range.end,
            "computed duration bucket"
        );
        self.total_between(query.employee_id, range).await
    }

    pub async fn total_between(&self, employee_id: i64, range: CanonicalRange) -> Result<String, TimeEntryError> {
        let entries = self
            .repository
            .find_by_employee_and_start_between(employee_id, range.start, range.end)
            .await?;
        Ok(format_total(total_worked(&entries)))
    }
}
