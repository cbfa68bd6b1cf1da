//! Axum route handlers for the ATS validation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::ats::{
    validate_for_ats, validate_resume_content, validate_template_design, AtsValidationResult,
};
use crate::errors::AppError;
use crate::models::template::TemplateMetadata;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub template: TemplateMetadata,
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// Rejects resume text above the configured size limit. Empty text is allowed.
pub fn check_resume_length(text: &str, max_chars: usize) -> Result<(), AppError> {
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::Validation(format!(
            "resume_text is {chars} characters, limit is {max_chars}"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/template
pub async fn handle_validate_template(
    Json(template): Json<TemplateMetadata>,
) -> Json<AtsValidationResult> {
    Json(validate_template_design(&template))
}

/// POST /api/v1/ats/content
pub async fn handle_validate_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<AtsValidationResult>, AppError> {
    check_resume_length(&request.resume_text, state.config.max_resume_chars)?;
    Ok(Json(validate_resume_content(&request.resume_text)))
}

/// POST /api/v1/ats/validate
///
/// Template design plus optional resume content in one pass.
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<AtsValidationResult>, AppError> {
    if let Some(text) = &request.resume_text {
        check_resume_length(text, state.config.max_resume_chars)?;
    }

    let result = validate_for_ats(&request.template, request.resume_text.as_deref());
    info!(
        score = result.score,
        passed = result.passed,
        with_content = request.resume_text.is_some(),
        "ATS validation complete"
    );
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_length_within_limit() {
        assert!(check_resume_length("Experience", 100).is_ok());
        assert!(check_resume_length("", 0).is_ok());
    }

    #[test]
    fn test_resume_length_counts_chars_not_bytes() {
        // 3 chars, 9 bytes
        assert!(check_resume_length("★★★", 3).is_ok());
    }

    #[test]
    fn test_resume_length_over_limit() {
        let err = check_resume_length("abcdef", 5).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
