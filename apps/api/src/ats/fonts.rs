use crate::ats::types::{AtsIssue, IssueCategory, Severity};
use crate::models::template::FontPairing;

/// Fonts that parsers routinely mangle or that read as unprofessional.
pub const ATS_UNFRIENDLY_FONTS: &[&str] = &[
    "comic sans",
    "papyrus",
    "impact",
    "brush script",
    "curlz",
    "jokerman",
    "chiller",
    "bradley hand",
];

/// Display and script faces: legible to people, risky for text extraction.
pub const COMPLEX_FONTS: &[&str] = &[
    "playfair display",
    "lobster",
    "pacifico",
    "dancing script",
    "great vibes",
    "satisfy",
];

fn find_match<'a>(font: &str, list: &[&'a str]) -> Option<&'a str> {
    let font_lower = font.to_lowercase();
    list.iter().copied().find(|f| font_lower.contains(f))
}

pub fn check_font_compliance(fonts: &FontPairing) -> Vec<AtsIssue> {
    let mut issues = Vec::new();

    if find_match(&fonts.heading, ATS_UNFRIENDLY_FONTS).is_some() {
        issues.push(AtsIssue::new(
            Severity::Medium,
            IssueCategory::Design,
            format!("Heading font \"{}\" is not ATS-friendly", fonts.heading),
            "Use a standard heading font such as Arial, Calibri, Georgia or Helvetica",
        ));
    }

    if find_match(&fonts.body, ATS_UNFRIENDLY_FONTS).is_some() {
        issues.push(AtsIssue::new(
            Severity::High,
            IssueCategory::Design,
            format!("Body font \"{}\" is not ATS-friendly", fonts.body),
            "Use a standard body font such as Arial, Calibri, Times New Roman or Helvetica",
        ));
    }

    let complex = find_match(&fonts.heading, COMPLEX_FONTS)
        .map(|_| fonts.heading.as_str())
        .or_else(|| find_match(&fonts.body, COMPLEX_FONTS).map(|_| fonts.body.as_str()));

    if let Some(font) = complex {
        issues.push(AtsIssue::new(
            Severity::Low,
            IssueCategory::Design,
            format!("Decorative font \"{font}\" may not parse reliably"),
            "Reserve decorative fonts for the name line, or switch to a simpler font",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairing(heading: &str, body: &str) -> FontPairing {
        FontPairing {
            heading: heading.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_standard_fonts_pass() {
        assert!(check_font_compliance(&pairing("Georgia", "Arial")).is_empty());
        assert!(check_font_compliance(&pairing("Helvetica Neue", "Calibri")).is_empty());
    }

    #[test]
    fn test_unfriendly_heading_is_medium() {
        let issues = check_font_compliance(&pairing("Comic Sans", "Arial"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert!(issues[0].message.contains("Heading"));
    }

    #[test]
    fn test_unfriendly_body_is_high() {
        let issues = check_font_compliance(&pairing("Arial", "Papyrus"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert!(issues[0].message.contains("Body"));
    }

    #[test]
    fn test_substring_and_case_insensitive_match() {
        let issues = check_font_compliance(&pairing("Comic Sans MS", "IMPACT"));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_complex_fonts_emit_single_low_issue() {
        let issues = check_font_compliance(&pairing("Playfair Display", "Lobster"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Low);
        assert!(issues[0].message.contains("Playfair Display"));
    }

    #[test]
    fn test_complex_body_font_detected() {
        let issues = check_font_compliance(&pairing("Arial", "Dancing Script"));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Dancing Script"));
    }

    #[test]
    fn test_all_three_issues_at_once() {
        let issues = check_font_compliance(&pairing("Impact", "Comic Sans Lobster"));
        let severities: Vec<_> = issues.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Medium, Severity::High, Severity::Low]
        );
    }
}
