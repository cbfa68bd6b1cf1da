//! WCAG contrast check between a template's primary colour and its background.

use std::sync::LazyLock;

use regex::Regex;

use crate::ats::types::{AtsIssue, IssueCategory, Severity};
use crate::models::template::ColorScheme;

/// WCAG AA minimum for body text.
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").expect("valid hex colour regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses `#RRGGBB` (hash optional, any case). Shorthand `#RGB` is not accepted.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let caps = HEX_COLOR.captures(hex.trim())?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1]. An unparseable colour counts as black (0.0).
pub fn relative_luminance(hex: &str) -> f64 {
    match hex_to_rgb(hex) {
        Some(Rgb { r, g, b }) => {
            0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
        }
        None => 0.0,
    }
}

/// Contrast ratio in [1, 21], order of arguments doesn't matter.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Only `primary` against the background is checked; secondary and accent are not.
pub fn check_color_contrast(scheme: &ColorScheme) -> Vec<AtsIssue> {
    let background = scheme.background_or_default();
    let ratio = contrast_ratio(&scheme.primary, background);

    if ratio < MIN_CONTRAST_RATIO {
        vec![AtsIssue::new(
            Severity::High,
            IssueCategory::Design,
            format!(
                "Low contrast between primary color {} and background {} ({:.2}:1, minimum {}:1)",
                scheme.primary, background, ratio, MIN_CONTRAST_RATIO
            ),
            "Use a darker primary color or a lighter background so text stays readable after scanning",
        )]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(primary: &str, background: Option<&str>) -> ColorScheme {
        ColorScheme {
            primary: primary.to_string(),
            secondary: "#333333".to_string(),
            accent: "#F1F3F4".to_string(),
            background: background.map(str::to_string),
            text: None,
        }
    }

    #[test]
    fn test_hex_to_rgb_accepts_with_and_without_hash() {
        let expected = Some(Rgb { r: 0x1F, g: 0x3A, b: 0x5F });
        assert_eq!(hex_to_rgb("#1F3A5F"), expected);
        assert_eq!(hex_to_rgb("1f3a5f"), expected);
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
        assert_eq!(hex_to_rgb("navy"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance("#000000"), 0.0);
        assert!((relative_luminance("#FFFFFF") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unparseable_color_treated_as_black() {
        assert_eq!(relative_luminance("not-a-color"), 0.0);
        let ratio = contrast_ratio("not-a-color", "#FFFFFF");
        assert!((ratio - 21.0).abs() < 1e-9, "ratio was {ratio}");
    }

    #[test]
    fn test_black_on_white_is_max_contrast() {
        let ratio = contrast_ratio("#000000", "#FFFFFF");
        assert!((ratio - 21.0).abs() < 1e-9, "ratio was {ratio}");
        assert!(check_color_contrast(&scheme("#000000", Some("#FFFFFF"))).is_empty());
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = contrast_ratio("#1F3A5F", "#F5F5F5");
        let b = contrast_ratio("#F5F5F5", "#1F3A5F");
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_same_color_ratio_is_one_and_flagged() {
        for color in ["#000000", "#777777", "#FFFFFF", "#2E86AB"] {
            let ratio = contrast_ratio(color, color);
            assert!((ratio - 1.0).abs() < 1e-12);
            let issues = check_color_contrast(&scheme(color, Some(color)));
            assert_eq!(issues.len(), 1, "{color} on itself should be flagged");
        }
    }

    #[test]
    fn test_light_gray_on_default_background_flagged_high() {
        let issues = check_color_contrast(&scheme("#CCCCCC", None));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].category, IssueCategory::Design);
        assert!(issues[0].message.contains("#FFFFFF"));
    }

    #[test]
    fn test_secondary_and_accent_not_checked() {
        let mut s = scheme("#000000", None);
        s.secondary = "#FFFFFF".to_string();
        s.accent = "#FEFEFE".to_string();
        assert!(check_color_contrast(&s).is_empty());
    }
}
