use axum::{extract::State, Json};

use crate::content::load_document;
use crate::errors::AppError;
use crate::models::content::ProjectsDocument;
use crate::state::AppState;

/// GET /data/projects.json
/// Serves the projects document with lenient defaults applied. No filtering here;
/// the page narrows cards on its own.
pub async fn handle_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectsDocument>, AppError> {
    let document = load_document(state.content.as_ref()).await?;
    Ok(Json(document))
}
