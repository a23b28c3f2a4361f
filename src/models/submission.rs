use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted submission. Serialized with camelCase keys for the API.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub company: String,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated content for a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub country: String,
    pub company: String,
    pub questions: Vec<String>,
}

/// Partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub questions: Option<Vec<String>>,
}

impl SubmissionPatch {
    /// Merge the supplied fields into `record`, refreshing `updated_at`.
    pub fn apply(self, record: &mut Submission, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(country) = self.country {
            record.country = country;
        }
        if let Some(company) = self.company {
            record.company = company;
        }
        if let Some(questions) = self.questions {
            record.questions = questions;
        }
        record.updated_at = now;
    }
}
