//! Handlers for the `/missions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cosmos_db::models::mission::{CreateMission, MissionDetail};
use cosmos_db::repositories::MissionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /missions
///
/// An unknown `scientist_id` or `planet_id` fails on the store's foreign
/// key and is answered like any other validation failure.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMission>,
) -> AppResult<(StatusCode, Json<MissionDetail>)> {
    let new = input.validate()?;
    let mission = MissionRepo::create(&state.pool, &new)
        .await
        .map_err(AppError::Rejected)?;
    tracing::info!(
        mission_id = mission.id,
        scientist_id = mission.scientist_id,
        planet_id = mission.planet_id,
        "Mission created"
    );

    let detail = MissionRepo::find_detail_by_id(&state.pool, mission.id)
        .await?
        .ok_or(AppError::not_found("Mission", mission.id))?;
    Ok((StatusCode::CREATED, Json(detail)))
}
