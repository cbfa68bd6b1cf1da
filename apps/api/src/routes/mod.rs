pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS validation
        .route("/api/v1/ats/template", post(ats::handle_validate_template))
        .route("/api/v1/ats/content", post(ats::handle_validate_content))
        .route("/api/v1/ats/validate", post(ats::handle_validate))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        .route(
            "/api/v1/templates/:id/validate",
            post(templates::handle_validate_template_by_id),
        )
        .with_state(state)
}
