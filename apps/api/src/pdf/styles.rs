//! Style Registry — the three built-in visual templates.
//!
//! Each style is a `'static` bundle of CSS, page margins, and composition
//! rules, fixed at compile time and shared read-only across render calls.
//! Stylesheets are fully self-contained: no remote font imports, so the
//! rendering engine needs no network access to lay out a page.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The three visual templates. Serde's lowercase rename makes request-body
/// deserialization the boundary validation for style names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Classic,
    Modern,
    Minimal,
}

/// How the composed page is arranged on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFamily {
    /// Full-bleed sidebar next to a main region (`modern`).
    Sidebar,
    /// Header band above a two-column body (`classic`, `minimal`).
    Column,
}

/// Uniform page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top_mm: f64,
    pub bottom_mm: f64,
    pub left_mm: f64,
    pub right_mm: f64,
}

impl Margins {
    pub const fn zero() -> Self {
        Self {
            top_mm: 0.0,
            bottom_mm: 0.0,
            left_mm: 0.0,
            right_mm: 0.0,
        }
    }

    pub const fn uniform_mm(mm: f64) -> Self {
        Self {
            top_mm: mm,
            bottom_mm: mm,
            left_mm: mm,
            right_mm: mm,
        }
    }
}

impl Style {
    /// Resolves a style name supplied as a raw string. Unknown names are a
    /// caller contract violation surfaced as a configuration error.
    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name {
            "classic" => Ok(Style::Classic),
            "modern" => Ok(Style::Modern),
            "minimal" => Ok(Style::Minimal),
            other => Err(AppError::Configuration(format!(
                "Unknown style '{other}' (expected classic, modern, or minimal)"
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Style::Classic => "classic",
            Style::Modern => "modern",
            Style::Minimal => "minimal",
        }
    }

    pub fn layout_family(&self) -> LayoutFamily {
        match self {
            Style::Modern => LayoutFamily::Sidebar,
            Style::Classic | Style::Minimal => LayoutFamily::Column,
        }
    }

    /// Separator placed between contact links in the header band.
    /// The sidebar family stacks links as blocks, so it joins with nothing.
    pub fn contact_separator(&self) -> &'static str {
        match self {
            Style::Modern => "",
            Style::Classic => " ",
            Style::Minimal => " \u{2022} ",
        }
    }

    /// The sidebar bleeds to the page edge; the column styles keep a fixed
    /// 10mm print margin.
    pub fn page_margins(&self) -> Margins {
        match self {
            Style::Modern => Margins::zero(),
            Style::Classic | Style::Minimal => Margins::uniform_mm(10.0),
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Style::Classic => CLASSIC_CSS,
            Style::Modern => MODERN_CSS,
            Style::Minimal => MINIMAL_CSS,
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const CLASSIC_CSS: &str = r#"
:root { --accent: #F4A261; --text: #444; --head: #000; }
body { font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; color: var(--text); padding: 25px 35px; font-size: 9px; line-height: 1.35; }
header { margin-bottom: 15px; display: flex; justify-content: space-between; align-items: flex-start; }
.header-left { border-left: 4px solid var(--accent); padding-left: 12px; }
h1 { font-size: 18px; font-weight: 800; margin: 0 0 3px 0; color: var(--head); text-transform: uppercase; letter-spacing: 0.5px; }
.role { font-size: 11px; color: #333; font-weight: 600; margin-bottom: 8px; }
.contacts { font-size: 9px; color: #666; margin-top: 3px; }
.contacts a { color: #666; text-decoration: none; margin-right: 8px; }
.container { display: grid; grid-template-columns: 65% 30%; gap: 5%; }
h2 { font-size: 13px; text-transform: uppercase; color: #556B2F; border-bottom: 1px solid #eee; padding-bottom: 3px; margin-top: 12px; margin-bottom: 8px; font-weight: 700; }
h3 { font-size: 11px; font-weight: 700; margin: 8px 0 1px 0; color: #000; }
p, ul { margin: 2px 0; }
ul { padding-left: 12px; }
li { margin-bottom: 1px; }
"#;

const MODERN_CSS: &str = r#"
body { font-family: 'Roboto', 'Segoe UI', Arial, sans-serif; color: #333; margin: 0; padding: 0; font-size: 9px; line-height: 1.4; }

.page-wrapper { display: grid; grid-template-columns: 32% 68%; min-height: 100vh; }

.sidebar { background-color: #2C3E50; color: #ecf0f1; padding: 30px 20px; }
.main { padding: 30px 25px; background: #fff; }

.sidebar h1 { font-size: 20px; margin: 0 0 5px 0; color: #fff; font-weight: 700; line-height: 1.2; }
.sidebar .role { font-size: 11px; color: #bdc3c7; margin-bottom: 20px; font-weight: 500; }
.sidebar h2 { font-size: 12px; text-transform: uppercase; color: #3498DB; border-bottom: 1px solid #34495E; padding-bottom: 5px; margin-top: 20px; margin-bottom: 10px; }
.sidebar a { color: #bdc3c7; text-decoration: none; display: block; margin-bottom: 3px; }
.sidebar h3 { font-size: 10px; color: #fff; margin-top: 10px; margin-bottom: 2px; }
.sidebar p, .sidebar li { color: #bdc3c7; font-size: 9px; }

.main h2 { font-size: 14px; text-transform: uppercase; color: #2C3E50; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 0; margin-bottom: 15px; letter-spacing: 1px; }
.main h2:not(:first-of-type) { margin-top: 20px; }

.main h3 { font-size: 12px; font-weight: 700; margin: 12px 0 2px 0; color: #000; }
.main p { margin-bottom: 5px; }
.main ul { padding-left: 15px; margin-top: 2px; }
.main li { margin-bottom: 3px; color: #444; }
"#;

const MINIMAL_CSS: &str = r#"
body { font-family: 'Open Sans', 'Segoe UI', Arial, sans-serif; color: #222; padding: 30px 40px; font-size: 9px; line-height: 1.45; }

header { text-align: center; margin-bottom: 25px; border-bottom: 1px solid #ddd; padding-bottom: 20px; }
h1 { font-family: 'Lora', Georgia, serif; font-size: 22px; margin: 0 0 5px 0; color: #000; }
.role { font-size: 10px; text-transform: uppercase; letter-spacing: 1.5px; color: #666; margin-bottom: 10px; }
.contacts { font-size: 9px; color: #555; }
.contacts span { margin: 0 5px; }
.contacts a { color: #222; text-decoration: none; border-bottom: 1px dotted #999; }

.container { display: grid; grid-template-columns: 70% 25%; gap: 5%; }

h2 { font-family: 'Lora', Georgia, serif; font-size: 13px; font-weight: 600; color: #000; text-transform: uppercase; margin-top: 20px; margin-bottom: 10px; padding-bottom: 3px; border-bottom: 1px solid #000; }
h3 { font-size: 11px; font-weight: 700; margin: 10px 0 2px 0; color: #000; }

p { margin: 3px 0; text-align: justify; }
ul { padding-left: 15px; margin: 3px 0; }
li { margin-bottom: 2px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_all_three_styles() {
        assert_eq!(Style::from_name("classic").unwrap(), Style::Classic);
        assert_eq!(Style::from_name("modern").unwrap(), Style::Modern);
        assert_eq!(Style::from_name("minimal").unwrap(), Style::Minimal);
    }

    #[test]
    fn test_from_name_rejects_unknown_style() {
        let err = Style::from_name("brutalist").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let style: Style = serde_json::from_str(r#""modern""#).unwrap();
        assert_eq!(style, Style::Modern);
        assert!(serde_json::from_str::<Style>(r#""Modern""#).is_err());
    }

    #[test]
    fn test_only_modern_uses_sidebar_layout() {
        assert_eq!(Style::Modern.layout_family(), LayoutFamily::Sidebar);
        assert_eq!(Style::Classic.layout_family(), LayoutFamily::Column);
        assert_eq!(Style::Minimal.layout_family(), LayoutFamily::Column);
    }

    #[test]
    fn test_only_modern_bleeds_to_page_edge() {
        assert_eq!(Style::Modern.page_margins(), Margins::zero());
        assert_eq!(Style::Classic.page_margins(), Margins::uniform_mm(10.0));
        assert_eq!(Style::Minimal.page_margins(), Margins::uniform_mm(10.0));
    }

    #[test]
    fn test_contact_separators_per_style() {
        assert_eq!(Style::Classic.contact_separator(), " ");
        assert_eq!(Style::Minimal.contact_separator(), " \u{2022} ");
        assert_eq!(Style::Modern.contact_separator(), "");
    }

    #[test]
    fn test_stylesheets_carry_no_remote_imports() {
        for style in [Style::Classic, Style::Modern, Style::Minimal] {
            assert!(!style.css().contains("@import"), "{style} css fetches remotely");
        }
    }
}
