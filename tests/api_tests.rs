mod common;

use reqwest::StatusCode;
use serde_json::json;

const REQUIRED_MESSAGE: &str =
    "All fields are required and questions must be a non-empty array of strings.";

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

// ── Create ──────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_created_record() {
    let app = common::spawn_app().await;

    let record = app.create_ann().await;
    assert!(record["id"].is_string());
    assert!(record["createdAt"].is_string());
    assert!(record["updatedAt"].is_string());
    assert_eq!(record["name"], "Ann");
    assert_eq!(record["country"], "US");
    assert_eq!(record["company"], "Acme");
    assert_eq!(
        record["questions"],
        json!(["Why this role?", "Tell me about yourself"])
    );
}

#[tokio::test]
async fn create_splits_delimited_questions() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .create(&json!({
            "name": "Bo",
            "country": "NZ",
            "company": "Kiwi",
            "questions": "a, b,c",
        }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["questions"], json!(["a", "b", "c"]));
}

#[tokio::test]
async fn create_keeps_empty_delimited_segments() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .create(&json!({
            "name": "Bo",
            "country": "NZ",
            "company": "Kiwi",
            "questions": "a,,b",
        }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["questions"], json!(["a", "", "b"]));

    let (body, status) = app
        .create(&json!({
            "name": "Bo",
            "country": "NZ",
            "company": "Kiwi",
            "questions": "",
        }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["questions"], json!([""]));
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let app = common::spawn_app().await;

    let cases = [
        json!({ "country": "US", "company": "Acme", "questions": ["q"] }),
        json!({ "name": "Ann", "company": "Acme", "questions": ["q"] }),
        json!({ "name": "Ann", "country": "US", "questions": ["q"] }),
        json!({ "name": "", "country": "US", "company": "Acme", "questions": ["q"] }),
        json!({ "name": "Ann", "country": "US", "company": "Acme" }),
        json!({ "name": "Ann", "country": "US", "company": "Acme", "questions": [] }),
    ];

    for case in cases {
        let (body, status) = app.create(&case).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case {case}");
        assert_eq!(body["message"], REQUIRED_MESSAGE, "case {case}");
    }

    let (list, _) = app.list().await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["message"].is_string());
}

// ── List ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_records_in_insertion_order() {
    let app = common::spawn_app().await;

    let first = app.create_ann().await;
    let (second, _) = app
        .create(&json!({
            "name": "Bo",
            "country": "NZ",
            "company": "Kiwi",
            "questions": ["Salary?"],
        }))
        .await;

    let (list, status) = app.list().await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], first);
    assert_eq!(list[1], second);
}

#[tokio::test]
async fn list_with_trailing_slash() {
    let app = common::spawn_app().await;
    app.create_ann().await;

    let resp = app.client.get(app.url("/api/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

// ── Update ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = common::spawn_app().await;
    let created = app.create_ann().await;
    let id = created["id"].as_str().unwrap();

    let (updated, status) = app.update(id, &json!({ "company": "Acme Corp" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["company"], "Acme Corp");
    assert_eq!(updated["name"], "Ann");
    assert_eq!(updated["country"], "US");
    assert_eq!(updated["questions"], created["questions"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn update_normalizes_delimited_questions() {
    let app = common::spawn_app().await;
    let created = app.create_ann().await;
    let id = created["id"].as_str().unwrap();

    let (updated, status) = app.update(id, &json!({ "questions": "x ,y" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["questions"], json!(["x", "y"]));
}

#[tokio::test]
async fn update_with_empty_questions_string_keeps_questions() {
    let app = common::spawn_app().await;
    let created = app.create_ann().await;
    let id = created["id"].as_str().unwrap();

    let (updated, status) = app.update(id, &json!({ "questions": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["questions"], created["questions"]);

    let (list, _) = app.list().await;
    assert_eq!(list[0]["questions"], created["questions"]);
}

#[tokio::test]
async fn update_rejects_blank_fields() {
    let app = common::spawn_app().await;
    let created = app.create_ann().await;
    let id = created["id"].as_str().unwrap();

    let (body, status) = app.update(id, &json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (_, status) = app.update(id, &json!({ "questions": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (list, _) = app.list().await;
    assert_eq!(list[0], created);
}

#[tokio::test]
async fn update_missing_id_returns_not_found() {
    let app = common::spawn_app().await;
    app.create_ann().await;
    let (before, _) = app.list().await;

    let missing = uuid::Uuid::now_v7().to_string();
    let (body, status) = app.update(&missing, &json!({ "name": "Zed" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Submission not found");

    let (after, _) = app.list().await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn update_malformed_id_is_bad_request() {
    let app = common::spawn_app().await;

    let (body, status) = app.update("not-an-id", &json!({ "name": "Zed" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("not-an-id"));
}

// ── Delete ──────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let app = common::spawn_app().await;
    let ann = app.create_ann().await;
    let (bo, _) = app
        .create(&json!({
            "name": "Bo",
            "country": "NZ",
            "company": "Kiwi",
            "questions": ["Salary?"],
        }))
        .await;
    let id = ann["id"].as_str().unwrap();

    let (body, status) = app.delete(id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Submission deleted");

    let (list, _) = app.list().await;
    assert_eq!(list, json!([bo]));

    let (body, status) = app.delete(id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Submission not found");
}

#[tokio::test]
async fn delete_malformed_id_is_server_error() {
    let app = common::spawn_app().await;

    let (body, status) = app.delete("not-an-id").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());
}

// ── Middleware ──────────────────────────────────────────────────

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .get(app.url("/api"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "*"
    );
    assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
}
