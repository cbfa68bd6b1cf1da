//! Plain-text heuristics for resume content that ATS parsers handle badly.
//!
//! Checks run in a fixed order and each one contributes its own deduction.
//! Image and decorative-glyph findings are reported as warnings but still
//! deduct from the score.

use std::sync::LazyLock;

use regex::Regex;

use crate::ats::types::{AtsIssue, AtsWarning, IssueCategory, Severity};

pub const TABLE_PENALTY: i32 = 10;
pub const IMAGE_PENALTY: i32 = 5;
pub const TEXT_BOX_PENALTY: i32 = 8;
pub const GLYPH_PENALTY: i32 = 3;

/// Headers an ATS expects to find. Fewer than `MIN_STANDARD_SECTIONS` raises a warning.
pub const STANDARD_SECTIONS: &[&str] = &["experience", "education", "skills", "summary", "objective"];
pub const MIN_STANDARD_SECTIONS: usize = 3;

pub const CONTENT_RECOMMENDATIONS: &[&str] = &[
    "Use standard section headers like \"Experience\", \"Education\" and \"Skills\"",
    "Avoid putting important information in headers or footers",
    "Use standard bullet points (•, -, *) instead of decorative symbols",
    "Save your resume as .docx or .pdf for best ATS compatibility",
];

// Markdown separator row such as `|---|` or `| :--- | ---: |`.
static MARKDOWN_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*:?-{3,}:?\s*\|").expect("valid table regex"));

static DECORATIVE_GLYPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[★☆♦◆●○■□▪▫]").expect("valid glyph regex"));

/// Findings from one pass over the resume text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentScan {
    pub issues: Vec<AtsIssue>,
    pub warnings: Vec<AtsWarning>,
    /// Total points to subtract from the baseline.
    pub deduction: i32,
    pub recommendations: Vec<String>,
    pub sections_found: Vec<&'static str>,
}

pub fn scan_resume_content(text: &str) -> ContentScan {
    let lower = text.to_lowercase();
    let mut scan = ContentScan::default();

    if lower.contains("<table") || MARKDOWN_TABLE.is_match(text) {
        scan.issues.push(AtsIssue::new(
            Severity::High,
            IssueCategory::Formatting,
            "Tables detected. Most ATS parsers scramble or drop table content",
            "Replace tables with plain text sections and bullet lists",
        ));
        scan.deduction += TABLE_PENALTY;
    }

    if lower.contains("<img") || lower.contains("[image]") {
        scan.warnings.push(AtsWarning::new(
            IssueCategory::Formatting,
            "Images detected. ATS parsers cannot read text inside images",
            "Remove images or make sure no information exists only in an image",
        ));
        scan.deduction += IMAGE_PENALTY;
    }

    if lower.contains("text-box") || lower.contains("textbox") {
        scan.issues.push(AtsIssue::new(
            Severity::Medium,
            IssueCategory::Formatting,
            "Text boxes detected. Content inside text boxes is often skipped",
            "Move text box content into the main body of the document",
        ));
        scan.deduction += TEXT_BOX_PENALTY;
    }

    if DECORATIVE_GLYPHS.is_match(text) {
        scan.warnings.push(AtsWarning::new(
            IssueCategory::Formatting,
            "Decorative symbols detected. They may render as garbage characters",
            "Use standard bullet points instead of decorative symbols",
        ));
        scan.deduction += GLYPH_PENALTY;
    }

    scan.sections_found = STANDARD_SECTIONS
        .iter()
        .copied()
        .filter(|s| lower.contains(s))
        .collect();

    if scan.sections_found.len() < MIN_STANDARD_SECTIONS {
        let missing: Vec<&str> = STANDARD_SECTIONS
            .iter()
            .copied()
            .filter(|s| !scan.sections_found.contains(s))
            .collect();
        scan.warnings.push(AtsWarning::new(
            IssueCategory::Structure,
            format!(
                "Only {} of {} standard sections found",
                scan.sections_found.len(),
                STANDARD_SECTIONS.len()
            ),
            format!("Add clearly labelled sections such as: {}", missing.join(", ")),
        ));
    }

    scan.recommendations = CONTENT_RECOMMENDATIONS
        .iter()
        .map(|r| r.to_string())
        .collect();

    scan
}
