pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission, SubmissionPatch};

pub use memory::MemoryStore;
pub use postgres::PgSubmissionStore;

#[derive(Debug)]
pub enum StoreError {
    /// The id could not be interpreted as a record key.
    InvalidId(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidId(id) => write!(f, "Invalid submission id: {id}"),
            StoreError::Database(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Parse a path id into a record key.
pub fn parse_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}

/// Keyed collection of submissions.
///
/// Missing ids are not errors here: lookups, updates and deletes return
/// `Ok(None)` and the caller decides what that means.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a new record, assigning its id and timestamps.
    async fn insert(&self, new: NewSubmission) -> Result<Submission, StoreError>;

    /// All records in insertion order.
    async fn fetch_all(&self) -> Result<Vec<Submission>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, StoreError>;

    /// Overwrite only the supplied fields and refresh `updated_at`.
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: SubmissionPatch,
    ) -> Result<Option<Submission>, StoreError>;

    /// Remove a record, returning it if it existed.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Submission>, StoreError>;
}
