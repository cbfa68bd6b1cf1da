//! Axum route handlers for the template catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::ats::handlers::check_resume_length;
use crate::ats::{validate_for_ats, validate_template_design, AtsValidationResult};
use crate::errors::AppError;
use crate::models::template::{LayoutType, TemplateMetadata};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub ats_friendly: bool,
}

/// Catalog entry annotated with its design-only ATS result.
#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub layout: LayoutType,
    pub ats_score: u32,
    pub ats_passed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct TemplateValidateRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
}

fn lookup<'a>(state: &'a AppState, id: &str) -> Result<&'a TemplateMetadata, AppError> {
    state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<TemplateSummary>> {
    let summaries = state
        .catalog
        .list()
        .iter()
        .map(|t| {
            let result = validate_template_design(t);
            TemplateSummary {
                id: t.id.clone(),
                name: t.name.clone(),
                description: t.description.clone(),
                layout: t.layout,
                ats_score: result.score,
                ats_passed: result.passed,
            }
        })
        .filter(|s| !query.ats_friendly || s.ats_passed)
        .collect();
    Json(summaries)
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateMetadata>, AppError> {
    Ok(Json(lookup(&state, &id)?.clone()))
}

/// POST /api/v1/templates/:id/validate
pub async fn handle_validate_template_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TemplateValidateRequest>,
) -> Result<Json<AtsValidationResult>, AppError> {
    let template = lookup(&state, &id)?;
    if let Some(text) = &request.resume_text {
        check_resume_length(text, state.config.max_resume_chars)?;
    }
    Ok(Json(validate_for_ats(template, request.resume_text.as_deref())))
}
