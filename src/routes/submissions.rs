use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::store::parse_id;
use crate::submission::{self, SubmissionInput};

const NOT_FOUND_MESSAGE: &str = "Submission not found";

pub async fn create(
    State(state): State<SharedState>,
    payload: Result<Json<SubmissionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    let input = body(payload)?;
    let new = submission::validate_new(input).map_err(AppError::Validation)?;

    let created = state.store.insert(new).await.map_err(AppError::write)?;

    tracing::info!(id = %created.id, "Submission created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.store.fetch_all().await.map_err(AppError::read)?;
    Ok(Json(submissions))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<SubmissionInput>, JsonRejection>,
) -> Result<Json<Submission>, AppError> {
    let input = body(payload)?;
    let patch = submission::validate_patch(input).map_err(AppError::Validation)?;
    let id = parse_id(&id).map_err(AppError::write)?;

    let updated = state
        .store
        .update_by_id(id, patch)
        .await
        .map_err(AppError::write)?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    tracing::info!(id = %updated.id, "Submission updated");
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_id(&id).map_err(AppError::read)?;

    state
        .store
        .delete_by_id(id)
        .await
        .map_err(AppError::read)?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    tracing::info!(%id, "Submission deleted");
    Ok(Json(serde_json::json!({ "message": "Submission deleted" })))
}

fn body(payload: Result<Json<SubmissionInput>, JsonRejection>) -> Result<SubmissionInput, AppError> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| {
            tracing::warn!("Malformed request body: {rejection}");
            // Oversized bodies keep their 413; every other body problem is a 400.
            let status = match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            AppError::Rejected(status, rejection.body_text())
        })
}
