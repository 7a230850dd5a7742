// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the storage capability as a trait so handlers never depend on a database.
//
// Responsibilities
// - Insertion assigns the id and is atomic: a failed insert leaves nothing behind.
// - Queries take canonical instants only.
//
// Testing guidance
// - The in memory adapter implements this trait for tests and local development.

use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    async fn insert(&self, entry: NewTimeEntry) -> Result<TimeEntry, StorageError>;

    /// Entries whose start lies in `[start_inclusive, end_exclusive)`.
    async fn find_by_employee_and_start_between(
        &self,
        employee_id: i64,
        start_inclusive: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>, StorageError>;

    /// Entries with `start < end_exclusive` and `end > start_inclusive`.
    async fn find_by_employee_overlapping(
        &self,
        employee_id: i64,
        end_exclusive: DateTime<Utc>,
        start_inclusive: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>, StorageError>;
}
