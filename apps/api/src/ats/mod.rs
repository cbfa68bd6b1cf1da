// ATS compatibility validation
// Template design checks (contrast, fonts, layout) and plain-text content heuristics,
// aggregated into a single 0–100 score. Pure and synchronous; handlers call it inline.

pub mod color;
pub mod content;
pub mod fonts;
pub mod handlers;
pub mod layout;
pub mod types;
pub mod validator;

pub use types::{AtsValidationResult, ATS_PASS_THRESHOLD};
pub use validator::{validate_for_ats, validate_resume_content, validate_template_design};
