use reqwest::{Client, Response};
use serde_json::Value;
use uuid::Uuid;

use crate::models::Submission;

use super::state::Draft;

#[derive(Debug)]
pub enum ClientError {
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    Status { status: u16, message: String },
    /// An update was requested while the form is not editing a record.
    NotEditing,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "Request failed: {err}"),
            ClientError::Status { status, message } => write!(f, "{status}: {message}"),
            ClientError::NotEditing => write!(f, "No submission selected for editing"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

/// Thin wrapper over the submissions HTTP API rooted at `base_url`
/// (for example `http://localhost:5000/api`).
#[derive(Debug, Clone)]
pub struct SubmissionApi {
    http: Client,
    base_url: String,
}

impl SubmissionApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Submission>, ClientError> {
        let resp = self.http.get(&self.base_url).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn create(&self, draft: &Draft) -> Result<Submission, ClientError> {
        let resp = self.http.post(&self.base_url).json(draft).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn update(&self, id: Uuid, draft: &Draft) -> Result<Submission, ClientError> {
        let resp = self
            .http
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let resp = self.http.delete(self.record_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }

    fn record_url(&self, id: Uuid) -> String {
        format!("{}/{id}", self.base_url)
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| status.to_string());

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
