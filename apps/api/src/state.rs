use std::sync::Arc;

use crate::config::Config;
use crate::templates::TemplateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup.
    pub catalog: Arc<TemplateCatalog>,
}
