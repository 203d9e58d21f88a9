//! Cue handlers — CRUD over the cue collection and the trigger endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use cuedeck_core::types::cue::{CreateCuePayload, Cue, UpdateCuePayload};

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/cues — the full cue collection. Public.
pub async fn list_cues(State(state): State<AppState>) -> Result<Json<Vec<Cue>>, ApiError> {
    let cues = state.cue_service.list().await?;
    Ok(Json(cues))
}

/// POST /api/cues — create a cue with a server-assigned id.
pub async fn create_cue(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(payload): Json<CreateCuePayload>,
) -> Result<(StatusCode, Json<Cue>), ApiError> {
    let cue = state.cue_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(cue)))
}

/// PUT /api/cues/{id} — replace a cue's fields.
pub async fn update_cue(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(cue_id): Path<String>,
    Json(payload): Json<UpdateCuePayload>,
) -> Result<Json<Cue>, ApiError> {
    let cue = state.cue_service.update(&cue_id, payload).await?;
    Ok(Json(cue))
}

/// DELETE /api/cues/{id}
pub async fn delete_cue(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(cue_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.cue_service.delete(&cue_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/cues/trigger/{id} — broadcast the cue id to every viewer.
///
/// The id is broadcast as-is without checking that it exists in the
/// repository; triggering an unknown id is a silent no-op on the viewers.
pub async fn trigger_cue(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(cue_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let delivered = state.broadcaster.broadcast(&cue_id);
    tracing::info!(cue_id = %cue_id, delivered, "Cue triggered");

    Ok(Json(MessageResponse {
        message: format!("Cue {cue_id} triggered"),
    }))
}
