/// Shared application state handed to every handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub pool: cosmos_db::DbPool,
}
