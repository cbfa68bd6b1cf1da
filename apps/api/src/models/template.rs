use serde::{Deserialize, Serialize};

/// Background assumed when a scheme does not set one.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// Template colour palette. Every value is a `#RRGGBB` hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ColorScheme {
    pub fn background_or_default(&self) -> &str {
        self.background.as_deref().unwrap_or(DEFAULT_BACKGROUND)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPairing {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    SingleColumn,
    TwoColumn,
    Creative,
    Minimal,
    /// Any layout the catalog doesn't know about. Carries no parsing risk.
    #[serde(other)]
    Other,
}

/// Everything the scorer needs to know about a resume template.
/// `id`, `name` and `description` are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color_scheme: ColorScheme,
    pub fonts: FontPairing,
    pub layout: LayoutType,
}
