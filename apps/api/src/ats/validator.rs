//! Score aggregation for template design, resume content, and both combined.
//!
//! Template penalties are flat per issue regardless of severity.
//! Content penalties are the itemised deductions from the content scanner.

use tracing::debug;

use crate::ats::color::check_color_contrast;
use crate::ats::content::scan_resume_content;
use crate::ats::fonts::check_font_compliance;
use crate::ats::layout::{check_layout, layout_recommendations};
use crate::ats::types::{AtsValidationResult, BASELINE_SCORE};
use crate::models::template::TemplateMetadata;

pub const COLOR_ISSUE_PENALTY: i32 = 5;
pub const FONT_ISSUE_PENALTY: i32 = 3;
pub const LAYOUT_ISSUE_PENALTY: i32 = 8;

pub fn validate_template_design(template: &TemplateMetadata) -> AtsValidationResult {
    let color_issues = check_color_contrast(&template.color_scheme);
    let font_issues = check_font_compliance(&template.fonts);
    let layout_issues = check_layout(template.layout);

    let raw_score = BASELINE_SCORE
        - color_issues.len() as i32 * COLOR_ISSUE_PENALTY
        - font_issues.len() as i32 * FONT_ISSUE_PENALTY
        - layout_issues.len() as i32 * LAYOUT_ISSUE_PENALTY;

    let issues: Vec<_> = color_issues
        .into_iter()
        .chain(font_issues)
        .chain(layout_issues)
        .collect();

    let result = AtsValidationResult::from_raw_score(
        raw_score,
        issues,
        vec![],
        layout_recommendations(template.layout),
    );
    debug!(
        template_id = %template.id,
        score = result.score,
        issues = result.issues.len(),
        "Template design validated"
    );
    result
}

pub fn validate_resume_content(resume_text: &str) -> AtsValidationResult {
    let scan = scan_resume_content(resume_text);
    let result = AtsValidationResult::from_raw_score(
        BASELINE_SCORE - scan.deduction,
        scan.issues,
        scan.warnings,
        scan.recommendations,
    );
    debug!(
        chars = resume_text.len(),
        score = result.score,
        issues = result.issues.len(),
        warnings = result.warnings.len(),
        "Resume content validated"
    );
    result
}

/// Design-only when no text is supplied. Otherwise averages the two scores,
/// passes only if both passes did, and concatenates findings design-first.
pub fn validate_for_ats(
    template: &TemplateMetadata,
    resume_text: Option<&str>,
) -> AtsValidationResult {
    let design = validate_template_design(template);
    let Some(text) = resume_text else {
        return design;
    };
    let content = validate_resume_content(text);

    let score = (f64::from(design.score + content.score) / 2.0).round() as u32;
    let passed = design.passed && content.passed;

    AtsValidationResult {
        score,
        passed,
        issues: [design.issues, content.issues].concat(),
        warnings: [design.warnings, content.warnings].concat(),
        recommendations: [design.recommendations, content.recommendations].concat(),
    }
}
