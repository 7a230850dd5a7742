use crate::modules::time_entries::core::ports::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeEntryError {
    #[error("invalid time zone: {0}")]
    InvalidZone(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid duration type {0:?}, use 'day', 'week', or 'month'")]
    InvalidBucketType(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TimeEntryError {
    /// Errors caused by the request itself rather than by a collaborator.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TimeEntryError::Storage(_))
    }
}
