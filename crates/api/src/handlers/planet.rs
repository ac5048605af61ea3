//! Handlers for the `/planets` resource.
//!
//! Planets are read-only over HTTP; they are provisioned by `cosmos-seed`.

use axum::extract::State;
use axum::Json;
use cosmos_db::models::planet::Planet;
use cosmos_db::repositories::PlanetRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /planets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets))
}
