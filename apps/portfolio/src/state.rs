use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where `/data/projects.json` is read from. Re-read on every request.
    pub content: Arc<dyn ContentSource>,
}
