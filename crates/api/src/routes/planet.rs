use axum::routing::get;
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Routes mounted at `/planets`. Read-only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(planet::list))
}
