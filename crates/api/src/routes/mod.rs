pub mod health;
pub mod mission;
pub mod planet;
pub mod scientist;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                       empty 200
///
/// /scientists             list, create
/// /scientists/{id}        get, update (PATCH), delete
///
/// /planets                list
///
/// /missions               create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest("/scientists", scientist::router())
        .nest("/planets", planet::router())
        .nest("/missions", mission::router())
}

/// GET / -- empty body, used by clients to check that the service is up.
async fn index() -> StatusCode {
    StatusCode::OK
}
