//! Handlers for the `/scientists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cosmos_db::models::scientist::{CreateScientist, Scientist, ScientistDetail, UpdateScientist};
use cosmos_db::repositories::ScientistRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, RowId};
use crate::state::AppState;

const ENTITY: &str = "Scientist";

/// GET /scientists
///
/// Listing form: no `missions` key.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Scientist>>> {
    let scientists = ScientistRepo::list(&state.pool).await?;
    Ok(Json(scientists))
}

/// POST /scientists
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateScientist>,
) -> AppResult<(StatusCode, Json<ScientistDetail>)> {
    let new = input.validate()?;
    let scientist = ScientistRepo::create(&state.pool, &new)
        .await
        .map_err(AppError::Rejected)?;
    tracing::info!(scientist_id = scientist.id, "Scientist created");

    Ok((
        StatusCode::CREATED,
        Json(ScientistDetail {
            scientist,
            missions: Vec::new(),
        }),
    ))
}

/// GET /scientists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: RowId,
) -> AppResult<Json<ScientistDetail>> {
    let id = id.resolve(ENTITY)?;
    let detail = ScientistRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(detail))
}

/// PATCH /scientists/{id}
///
/// The scientist is looked up before the body is examined, so an unknown id
/// answers 404 even when the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    id: RowId,
    payload: Result<JsonBody<UpdateScientist>, AppError>,
) -> AppResult<(StatusCode, Json<ScientistDetail>)> {
    let id = id.resolve(ENTITY)?;
    ScientistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let JsonBody(input) = payload?;
    let changes = input.validate()?;

    ScientistRepo::update(&state.pool, id, &changes)
        .await
        .map_err(AppError::Rejected)?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(scientist_id = id, "Scientist updated");

    let detail = ScientistRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok((StatusCode::ACCEPTED, Json(detail)))
}

/// DELETE /scientists/{id}
///
/// Missions owned by the scientist are removed by the store cascade.
pub async fn delete(State(state): State<AppState>, id: RowId) -> AppResult<StatusCode> {
    let id = id.resolve(ENTITY)?;
    let deleted = ScientistRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(scientist_id = id, "Scientist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
