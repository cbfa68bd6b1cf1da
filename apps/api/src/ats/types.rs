use serde::{Deserialize, Serialize};

/// Minimum score for a result to count as ATS-compatible.
pub const ATS_PASS_THRESHOLD: u32 = 85;

/// Baseline every validation starts from before penalties.
pub const BASELINE_SCORE: i32 = 100;

/// Attached to every issue. Reported to the user but not used to weight the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Design,
    Content,
    Formatting,
    Structure,
}

/// A problem that costs score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsIssue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    pub fix: String,
}

impl AtsIssue {
    pub fn new(
        severity: Severity,
        category: IssueCategory,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            fix: fix.into(),
        }
    }
}

/// Advisory finding. Whether it costs score is up to the scanner that raised it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsWarning {
    pub category: IssueCategory,
    pub message: String,
    pub suggestion: String,
}

impl AtsWarning {
    pub fn new(
        category: IssueCategory,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsValidationResult {
    pub score: u32, // 0 – 100
    pub passed: bool,
    pub issues: Vec<AtsIssue>,
    pub warnings: Vec<AtsWarning>,
    pub recommendations: Vec<String>,
}

impl AtsValidationResult {
    /// Builds a result from a raw (possibly out of range) score.
    /// The score is clamped to [0, 100] before `passed` is derived from it.
    pub fn from_raw_score(
        raw_score: i32,
        issues: Vec<AtsIssue>,
        warnings: Vec<AtsWarning>,
        recommendations: Vec<String>,
    ) -> Self {
        let score = clamp_score(raw_score);
        Self {
            score,
            passed: is_passing(score),
            issues,
            warnings,
            recommendations,
        }
    }
}

pub fn clamp_score(raw_score: i32) -> u32 {
    raw_score.clamp(0, 100) as u32
}

pub fn is_passing(score: u32) -> bool {
    score >= ATS_PASS_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_threshold_boundaries() {
        assert!(!is_passing(84));
        assert!(is_passing(85));
        assert!(is_passing(86));
    }

    #[test]
    fn test_negative_score_clamped_to_zero() {
        let r = AtsValidationResult::from_raw_score(-40, vec![], vec![], vec![]);
        assert_eq!(r.score, 0);
        assert!(!r.passed);
    }

    #[test]
    fn test_score_above_hundred_clamped() {
        let r = AtsValidationResult::from_raw_score(130, vec![], vec![], vec![]);
        assert_eq!(r.score, 100);
        assert!(r.passed);
    }

    #[test]
    fn test_passed_derived_after_clamp() {
        for raw in [-500, -1, 0, 84, 85, 86, 100, 101, 999] {
            let r = AtsValidationResult::from_raw_score(raw, vec![], vec![], vec![]);
            assert!(r.score <= 100);
            assert_eq!(r.passed, r.score >= 85, "raw {raw}");
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
