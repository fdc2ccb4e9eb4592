//! Document Composer — assembles the parsed model, split content, and a
//! style into one self-contained HTML document.
//!
//! Two layout families share the same model: `modern` places contacts and
//! skills in a full-bleed sidebar, while `classic`/`minimal` put a header
//! band above a two-column body. Markdown fragments arrive pre-rendered and
//! are embedded untouched; only header text is escaped here.

use crate::pdf::contacts::ContactEntry;
use crate::pdf::markdown::{escape_html, to_html};
use crate::pdf::sections::ResumeDocument;
use crate::pdf::styles::{LayoutFamily, Style};

/// Composes the final HTML document for one render call. Deterministic:
/// the same document and style always produce byte-identical output.
pub fn compose(doc: &ResumeDocument, style: Style) -> String {
    let primary_html = to_html(&doc.primary_body);
    let secondary_html = to_html(&doc.secondary_body);

    match style.layout_family() {
        LayoutFamily::Sidebar => compose_sidebar(doc, style, &primary_html, &secondary_html),
        LayoutFamily::Column => compose_columns(doc, style, &primary_html, &secondary_html),
    }
}

/// Sidebar layout: identity, contacts, and skills in the colored rail; the
/// primary body fills the main region.
fn compose_sidebar(
    doc: &ResumeDocument,
    style: Style,
    primary_html: &str,
    secondary_html: &str,
) -> String {
    let contacts = contact_links(&doc.contacts, style.contact_separator());

    format!(
        r#"<!DOCTYPE html>
<html>
<head><style>{css}</style></head>
<body>
  <div class="page-wrapper">
    <div class="sidebar">
      <h1>{name}</h1>
      <div class="role">{role}</div>
      <div class="contacts-list">{contacts}</div>
      {secondary_html}
    </div>
    <div class="main">
      {primary_html}
    </div>
  </div>
</body>
</html>
"#,
        css = style.css(),
        name = escape_html(&doc.name),
        role = display_role(&doc.role_line),
    )
}

/// Column layout: header band, then primary content left and skills right.
/// `classic` gets the accent-bordered header block; `minimal` does not.
fn compose_columns(
    doc: &ResumeDocument,
    style: Style,
    primary_html: &str,
    secondary_html: &str,
) -> String {
    let contacts = contact_links(&doc.contacts, style.contact_separator());
    let header_class = if style == Style::Classic {
        "header-left"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><style>{css}</style></head>
<body>
  <header>
    <div class="{header_class}">
      <h1>{name}</h1>
      <div class="role">{role}</div>
      <div class="contacts">{contacts}</div>
    </div>
  </header>
  <div class="container">
    <div class="left-column">{primary_html}</div>
    <div class="right-column">{secondary_html}</div>
  </div>
</body>
</html>
"#,
        css = style.css(),
        name = escape_html(&doc.name),
        role = display_role(&doc.role_line),
    )
}

/// Renders each contact as a link labeled by its value, joined with the
/// style's separator.
fn contact_links(contacts: &[ContactEntry], separator: &str) -> String {
    contacts
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}">{}</a>"#,
                escape_html(&c.href),
                escape_html(&c.value)
            )
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Strips the bold-emphasis markers from the raw role line for display.
fn display_role(role_line: &str) -> String {
    escape_html(&role_line.replace("**", ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::sections::extract;

    const FULL_CV: &str = "# Jane Doe\n**Engineer**\n\n**Contact:**\n- Email: jane@x.com\n- GitHub: github.com/jane\n\n## Summary\nText.\n## Technical Skills\nGo, Rust";

    #[test]
    fn test_classic_composes_header_columns_and_contacts() {
        let doc = extract(FULL_CV);
        let html = compose(&doc, Style::Classic);

        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains(r#"class="header-left""#));
        assert!(html.contains("left-column"));
        assert!(html.contains("right-column"));
        // Contacts joined by a single space, links normalized.
        assert!(html.contains(
            r#"<a href="mailto:jane@x.com">jane@x.com</a> <a href="https://github.com/jane">github.com/jane</a>"#
        ));
        // Primary content lands left, skills land right.
        let left = html.find("left-column").unwrap();
        let right = html.find("right-column").unwrap();
        assert!(html[left..right].contains("Summary"));
        assert!(html[right..].contains("Technical Skills"));
        assert!(html[right..].contains("Go, Rust"));
    }

    #[test]
    fn test_modern_is_the_only_style_with_a_sidebar() {
        let doc = extract(FULL_CV);
        assert!(compose(&doc, Style::Modern).contains(r#"class="sidebar""#));
        assert!(!compose(&doc, Style::Classic).contains(r#"class="sidebar""#));
        assert!(!compose(&doc, Style::Minimal).contains(r#"class="sidebar""#));
    }

    #[test]
    fn test_modern_sidebar_holds_contacts_and_skills() {
        let doc = extract(FULL_CV);
        let html = compose(&doc, Style::Modern);

        let sidebar = html.find(r#"class="sidebar""#).unwrap();
        let main = html.find(r#"class="main""#).unwrap();
        assert!(html[sidebar..main].contains("Technical Skills"));
        assert!(html[main..].contains("Summary"));
        // Sidebar links are stacked with no separator between anchors.
        assert!(html.contains(
            r#"<a href="mailto:jane@x.com">jane@x.com</a><a href="https://github.com/jane">github.com/jane</a>"#
        ));
    }

    #[test]
    fn test_minimal_joins_contacts_with_bullets() {
        let doc = extract(FULL_CV);
        let html = compose(&doc, Style::Minimal);
        assert!(html.contains("</a> \u{2022} <a"));
        assert!(!html.contains(r#"class="header-left""#));
    }

    #[test]
    fn test_accent_header_is_classic_only() {
        let doc = extract(FULL_CV);
        assert!(compose(&doc, Style::Classic).contains("header-left"));
        assert!(!compose(&doc, Style::Minimal).contains("header-left"));
        assert!(!compose(&doc, Style::Modern).contains("header-left"));
    }

    #[test]
    fn test_role_markers_are_stripped_for_display() {
        let doc = extract(FULL_CV);
        let html = compose(&doc, Style::Classic);
        assert!(html.contains(r#"<div class="role">Engineer</div>"#));
    }

    #[test]
    fn test_header_text_is_escaped() {
        let doc =
            extract("# Jane <script> Doe\n**R&D**\n\n**Contact:**\n- Email: j@x.com\n\nbody");
        let html = compose(&doc, Style::Minimal);
        assert!(html.contains("Jane &lt;script&gt; Doe"));
        assert!(html.contains("R&amp;D"));
        // The raw tag never reaches the composed header.
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let doc = extract(FULL_CV);
        for style in [Style::Classic, Style::Modern, Style::Minimal] {
            assert_eq!(compose(&doc, style), compose(&doc, style));
        }
    }

    #[test]
    fn test_three_styles_are_structurally_distinct() {
        let doc = extract(FULL_CV);
        let classic = compose(&doc, Style::Classic);
        let modern = compose(&doc, Style::Modern);
        let minimal = compose(&doc, Style::Minimal);
        assert_ne!(classic, modern);
        assert_ne!(classic, minimal);
        assert_ne!(modern, minimal);
    }
}
