pub mod dispatch;
pub mod request_path;
pub mod state;
pub mod static_files;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::http::state::AppState;

/// Every path goes to the dispatcher; it decides between feed and static file.
/// `get` also answers HEAD (body stripped) and rejects other methods with 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dispatch::dispatch))
        .route("/{*path}", get(dispatch::dispatch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
