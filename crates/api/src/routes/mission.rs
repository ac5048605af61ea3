use axum::routing::post;
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/missions`. Create only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(mission::create))
}
