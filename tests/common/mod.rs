#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use interviewlog::config::Config;
use interviewlog::store::{MemoryStore, SubmissionStore};

/// A running test server instance backed by its own store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<dyn SubmissionStore>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Base URL of the submissions API, as a client would configure it.
    pub fn api_url(&self) -> String {
        self.url("/api")
    }

    pub async fn list(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn create(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api"))
            .json(body)
            .send()
            .await
            .expect("create request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn update(&self, id: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(&format!("/api/{id}")))
            .json(body)
            .send()
            .await
            .expect("update request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete(&self, id: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(&format!("/api/{id}")))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create Ann's submission and return the created record.
    pub async fn create_ann(&self) -> Value {
        let (body, status) = self
            .create(&json!({
                "name": "Ann",
                "country": "US",
                "company": "Acme",
                "questions": ["Why this role?", "Tell me about yourself"],
            }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 1_048_576,
        cors_origins: vec![],
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app on an in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(MemoryStore::new())).await
}

/// Spawn a test app on the given store.
pub async fn spawn_app_with(store: Arc<dyn SubmissionStore>) -> TestApp {
    let app = interviewlog::build_app(store.clone(), test_config());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}
