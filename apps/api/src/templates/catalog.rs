//! Built-in resume template catalog.

use crate::models::template::{ColorScheme, FontPairing, LayoutType, TemplateMetadata};

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<TemplateMetadata>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<TemplateMetadata>) -> Self {
        Self { templates }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            entry(
                "classic",
                "Classic",
                "Traditional single-column layout with serif headings",
                scheme("#1F3A5F", "#4A4A4A", "#2E86AB"),
                ("Georgia", "Arial"),
                LayoutType::SingleColumn,
            ),
            entry(
                "modern",
                "Modern",
                "Sidebar for skills and contact details next to the main column",
                scheme("#2563EB", "#1E293B", "#38BDF8"),
                ("Helvetica", "Calibri"),
                LayoutType::TwoColumn,
            ),
            entry(
                "executive",
                "Executive",
                "Conservative layout for senior roles",
                scheme("#111827", "#374151", "#B45309"),
                ("Times New Roman", "Garamond"),
                LayoutType::SingleColumn,
            ),
            entry(
                "creative",
                "Creative",
                "Bold colour blocks and display headings for design portfolios",
                scheme("#F472B6", "#6D28D9", "#FBBF24"),
                ("Playfair Display", "Lato"),
                LayoutType::Creative,
            ),
            entry(
                "minimal",
                "Minimal",
                "Plain text, generous whitespace, no accents",
                scheme("#000000", "#555555", "#999999"),
                ("Arial", "Arial"),
                LayoutType::Minimal,
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&TemplateMetadata> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn list(&self) -> &[TemplateMetadata] {
        &self.templates
    }
}

fn scheme(primary: &str, secondary: &str, accent: &str) -> ColorScheme {
    ColorScheme {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        background: None,
        text: None,
    }
}

fn entry(
    id: &str,
    name: &str,
    description: &str,
    color_scheme: ColorScheme,
    (heading, body): (&str, &str),
    layout: LayoutType,
) -> TemplateMetadata {
    TemplateMetadata {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color_scheme,
        fonts: FontPairing {
            heading: heading.to_string(),
            body: body.to_string(),
        },
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::validate_template_design;

    #[test]
    fn test_builtin_has_five_unique_ids() {
        let catalog = TemplateCatalog::builtin();
        let mut ids: Vec<_> = catalog.list().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.get("modern").map(|t| t.layout), Some(LayoutType::TwoColumn));
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn test_builtin_design_scores() {
        let catalog = TemplateCatalog::builtin();
        let score = |id: &str| validate_template_design(catalog.get(id).unwrap()).score;
        assert_eq!(score("classic"), 100);
        assert_eq!(score("executive"), 100);
        assert_eq!(score("minimal"), 100);
        // two-column layout issue
        assert_eq!(score("modern"), 92);
        // pink on white (5) + decorative heading (3) + creative layout (8)
        assert_eq!(score("creative"), 84);
    }
}
