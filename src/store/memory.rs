use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission, SubmissionPatch};

use super::{StoreError, SubmissionStore};

/// In-process store. Used when no database is configured, and by tests.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Submission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let now = Utc::now();
        let record = Submission {
            id: Uuid::now_v7(),
            name: new.name,
            country: new.country,
            company: new.company,
            questions: new.questions,
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn fetch_all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: SubmissionPatch,
    ) -> Result<Option<Submission>, StoreError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        patch.apply(record, Utc::now());
        Ok(Some(record.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let mut records = self.records.write().await;
        let removed = records
            .iter()
            .position(|r| r.id == id)
            .map(|index| records.remove(index));
        Ok(removed)
    }
}
