use crate::ats::types::{AtsIssue, IssueCategory, Severity};
use crate::models::template::LayoutType;

pub fn check_layout(layout: LayoutType) -> Vec<AtsIssue> {
    match layout {
        LayoutType::Creative => vec![AtsIssue::new(
            Severity::Medium,
            IssueCategory::Structure,
            "Creative layouts often confuse ATS parsers",
            "Switch to a single-column layout with conventional section order",
        )],
        LayoutType::TwoColumn => vec![AtsIssue::new(
            Severity::Low,
            IssueCategory::Structure,
            "Two-column layouts can be read out of order by some ATS parsers",
            "Keep core content in the main column or switch to a single-column layout",
        )],
        LayoutType::SingleColumn | LayoutType::Minimal | LayoutType::Other => vec![],
    }
}

/// Advice shown alongside the layout issues. Never affects the score.
pub fn layout_recommendations(layout: LayoutType) -> Vec<String> {
    match layout {
        LayoutType::TwoColumn => vec![
            "Consider a single-column version of this resume for online applications".to_string(),
        ],
        LayoutType::Creative => vec![
            "Keep a creative version for networking and a simple version for ATS submissions"
                .to_string(),
        ],
        _ => vec![],
    }
}
