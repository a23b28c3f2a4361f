use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission, SubmissionPatch};

use super::{StoreError, SubmissionStore};

pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let submission = sqlx::query_as::<_, Submission>(
            "INSERT INTO submissions (id, name, country, company, questions)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&new.name)
        .bind(&new.country)
        .bind(&new.company)
        .bind(&new.questions)
        .fetch_one(&self.pool)
        .await?;
        Ok(submission)
    }

    async fn fetch_all(&self) -> Result<Vec<Submission>, StoreError> {
        let submissions = sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(submissions)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let submission = sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(submission)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: SubmissionPatch,
    ) -> Result<Option<Submission>, StoreError> {
        // NULL parameters keep the stored column.
        let submission = sqlx::query_as::<_, Submission>(
            "UPDATE submissions SET
                name = COALESCE($2, name),
                country = COALESCE($3, country),
                company = COALESCE($4, company),
                questions = COALESCE($5, questions),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.country)
        .bind(patch.company)
        .bind(patch.questions)
        .fetch_optional(&self.pool)
        .await?;
        Ok(submission)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let submission =
            sqlx::query_as::<_, Submission>("DELETE FROM submissions WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(submission)
    }
}
