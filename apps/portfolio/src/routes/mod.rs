pub mod content;
pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.site_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/data/projects.json", get(content::handle_projects))
        .fallback_service(static_files)
        .with_state(state)
}
