// In memory implementation of the TimeEntryRepository port.
//
// Purpose
// - Exercise handlers and the HTTP surface without a database.
//
// Responsibilities
// - Keep entries in insertion order and assign ids starting at 1.
// - Apply the same half-open and overlap filters a database query would.

use crate::modules::time_entries::core::ports::{StorageError, TimeEntryRepository};
use crate::modules::time_entries::core::range::CanonicalRange;
use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntries {
    rows: RwLock<Vec<TimeEntry>>,
    calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryTimeEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Number of port calls received, successful or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline {
            return Err(StorageError::Backend("Time entries storage offline".into()));
        }
        Ok(())
    }

    async fn select(&self, employee_id: i64, keep: impl Fn(&TimeEntry) -> bool) -> Vec<TimeEntry> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| row.employee_id == employee_id && keep(row))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl TimeEntryRepository for InMemoryTimeEntries {
    async fn insert(&self, entry: NewTimeEntry) -> Result<TimeEntry, StorageError> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        let id = i64::try_from(guard.len() + 1).map_err(|e| StorageError::Backend(e.to_string()))?;
        let stored = entry.with_id(id);
        guard.push(stored.clone());
        tracing::debug!(id, employee_id = stored.employee_id, "stored time entry");
        Ok(stored)
    }

    async fn find_by_employee_and_start_between(
        &self,
        employee_id: i64,
        start_inclusive: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>, StorageError> {
        self.check_online()?;
        let range = CanonicalRange::new(start_inclusive, end_exclusive);
        Ok(self.select(employee_id, |row| range.contains(row.start_time)).await)
    }

    async fn find_by_employee_overlapping(
        &self,
        employee_id: i64,
        end_exclusive: DateTime<Utc>,
        start_inclusive: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>, StorageError> {
        self.check_online()?;
        let range = CanonicalRange::new(start_inclusive, end_exclusive);
        Ok(self
            .select(employee_id, |row| range.overlaps(row.start_time, row.end_time))
            .await)
    }
}
