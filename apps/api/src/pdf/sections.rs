//! Section Extractor — recovers a structured CV model from freeform markdown.
//!
//! The input is user-authored text, not schema-validated data. Every lookup
//! here is positional and best-effort: a missing heading, role line, or
//! contact block degrades to a default instead of failing the extraction.

use crate::pdf::contacts::{normalize, ContactEntry};

/// Marker line that opens the contact block.
const CONTACT_MARKER: &str = "**Contact:**";

/// Heading that splits the body into the primary and skills columns.
/// A structural convention of the CV dialect, not user-configurable.
const SKILLS_HEADING: &str = "## Technical Skills";

/// Fallback document name when the markdown has no level-1 heading.
const DEFAULT_NAME: &str = "CV";

/// The CV model extracted from markdown, rebuilt fresh on every render call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    /// Remainder of the first `# ` line, or `"CV"` if none exists.
    pub name: String,
    /// First `**`-opened line after the name line, emphasis markers intact.
    /// Empty when the document has no role line.
    pub role_line: String,
    pub contacts: Vec<ContactEntry>,
    /// Markdown before the skills heading.
    pub primary_body: String,
    /// Markdown from the skills heading onward, re-prefixed with the heading.
    pub secondary_body: String,
}

/// Parses raw markdown into a `ResumeDocument`. Single pass over the lines;
/// never fails.
pub fn extract(markdown: &str) -> ResumeDocument {
    let lines: Vec<&str> = markdown.split('\n').collect();

    let name_idx = lines.iter().position(|l| l.starts_with("# "));
    let name = name_idx
        .map(|i| lines[i].strip_prefix("# ").unwrap_or(lines[i]).trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    // Role search starts strictly after the name line; from the top when the
    // name heading is absent.
    let role_from = name_idx.map(|i| i + 1).unwrap_or(0);
    let role_line = lines
        .iter()
        .skip(role_from)
        .find(|l| l.trim().starts_with("**"))
        .map(|l| l.to_string())
        .unwrap_or_default();

    let (contacts, body) = extract_contacts_and_body(&lines, markdown);

    let (primary_body, secondary_body) = split_body(&body);

    ResumeDocument {
        name,
        role_line,
        contacts,
        primary_body,
        secondary_body,
    }
}

/// Locates the contact block and returns its entries plus the remaining body.
/// Without a contact block the whole input is body and the list is empty.
fn extract_contacts_and_body(lines: &[&str], markdown: &str) -> (Vec<ContactEntry>, String) {
    let Some(contact_start) = lines.iter().position(|l| l.contains(CONTACT_MARKER)) else {
        return (Vec::new(), markdown.to_string());
    };

    // The block runs until the first blank line after the marker. No blank
    // line means it runs to the end of input.
    let contact_end = lines
        .iter()
        .enumerate()
        .skip(contact_start + 1)
        .find(|(_, l)| l.trim().is_empty())
        .map(|(i, _)| i)
        .unwrap_or(lines.len());

    let contacts = lines[contact_start + 1..contact_end]
        .iter()
        .filter(|l| l.trim().starts_with('-'))
        .map(|l| parse_contact_line(l))
        .collect();

    // Body starts at the terminating blank line itself.
    let body = lines[contact_end..].join("\n");

    (contacts, body)
}

/// Parses a `- Label: value` list item. The value is everything after the
/// first colon, so URLs with embedded colons survive intact.
fn parse_contact_line(line: &str) -> ContactEntry {
    // Only the single leading list marker comes off; further dashes are content.
    let trimmed = line.trim();
    let text = trimmed.strip_prefix('-').unwrap_or(trimmed).trim();
    match text.split_once(':') {
        Some((label, value)) => normalize(label, value.trim()),
        None => normalize(text, ""),
    }
}

/// Splits the body at the first `## Technical Skills` heading. The secondary
/// side is re-prefixed with the heading so it renders as its own section;
/// with no marker present it is the heading alone.
pub fn split_body(body: &str) -> (String, String) {
    match body.split_once(SKILLS_HEADING) {
        Some((primary, rest)) => (primary.to_string(), format!("{SKILLS_HEADING}\n{rest}")),
        None => (body.to_string(), format!("{SKILLS_HEADING}\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CV: &str = "# Jane Doe\n**Engineer**\n\n**Contact:**\n- Email: jane@x.com\n- GitHub: github.com/jane\n\n## Summary\nText.\n## Technical Skills\nGo, Rust";

    #[test]
    fn test_extracts_name_from_heading() {
        let doc = extract(FULL_CV);
        assert_eq!(doc.name, "Jane Doe");
    }

    #[test]
    fn test_heading_marker_is_stripped_only_once() {
        let doc = extract("# # Title\n\nbody");
        assert_eq!(doc.name, "# Title");
    }

    #[test]
    fn test_missing_heading_defaults_name_to_cv() {
        let doc = extract("no heading here\n\njust text");
        assert_eq!(doc.name, "CV");
    }

    #[test]
    fn test_role_line_is_first_bold_line_after_name() {
        let doc = extract(FULL_CV);
        assert_eq!(doc.role_line, "**Engineer**");
    }

    #[test]
    fn test_missing_role_line_is_empty() {
        let doc = extract("# Jane Doe\n\nplain text only");
        assert_eq!(doc.role_line, "");
    }

    #[test]
    fn test_role_search_starts_after_name_line() {
        // A bold line before the heading must not be picked up.
        let doc = extract("**Not a role**\n# Jane Doe\n**Engineer**");
        assert_eq!(doc.role_line, "**Engineer**");
    }

    #[test]
    fn test_contact_block_parses_labeled_entries() {
        let doc = extract(FULL_CV);
        assert_eq!(doc.contacts.len(), 2);
        assert_eq!(doc.contacts[0].label, "Email");
        assert_eq!(doc.contacts[0].value, "jane@x.com");
        assert_eq!(doc.contacts[0].href, "mailto:jane@x.com");
        assert_eq!(doc.contacts[1].href, "https://github.com/jane");
    }

    #[test]
    fn test_only_the_leading_list_marker_is_stripped() {
        // A doubled dash keeps its second dash as part of the label.
        let doc = extract("# J\n**Contact:**\n-- Email: j@x.com\n\nbody");
        assert_eq!(doc.contacts[0].label, "- Email");
        assert_eq!(doc.contacts[0].value, "j@x.com");
    }

    #[test]
    fn test_contact_value_keeps_embedded_colons() {
        let doc = extract("# J\n\n**Contact:**\n- Site: https://x.dev/a:b\n\nbody");
        assert_eq!(doc.contacts[0].value, "https://x.dev/a:b");
    }

    #[test]
    fn test_missing_contact_block_yields_empty_list_and_full_body() {
        let input = "# Jane Doe\n\n## Summary\nText.";
        let doc = extract(input);
        assert!(doc.contacts.is_empty());
        assert!(doc.primary_body.contains("## Summary"));
        // Body covers the whole document, heading included.
        assert!(doc.primary_body.contains("# Jane Doe"));
    }

    #[test]
    fn test_unterminated_contact_block_runs_to_end() {
        let doc = extract("# J\n**Contact:**\n- Email: j@x.com");
        assert_eq!(doc.contacts.len(), 1);
        assert_eq!(doc.primary_body, "");
    }

    #[test]
    fn test_non_list_lines_inside_contact_block_are_skipped() {
        let doc = extract("# J\n**Contact:**\nnot a list item\n- Email: j@x.com\n\nbody");
        assert_eq!(doc.contacts.len(), 1);
    }

    #[test]
    fn test_body_starts_at_blank_line_after_contacts() {
        let doc = extract(FULL_CV);
        assert!(doc.primary_body.starts_with('\n'));
        assert!(doc.primary_body.contains("## Summary"));
        assert!(!doc.primary_body.contains("jane@x.com"));
    }

    #[test]
    fn test_split_body_at_skills_heading() {
        let (primary, secondary) = split_body("## Summary\nText.\n## Technical Skills\nGo, Rust");
        assert_eq!(primary, "## Summary\nText.\n");
        assert_eq!(secondary, "## Technical Skills\n\nGo, Rust");
    }

    #[test]
    fn test_split_body_without_marker() {
        let body = "## Summary\nText only.";
        let (primary, secondary) = split_body(body);
        assert_eq!(primary, body);
        assert_eq!(secondary, "## Technical Skills\n");
    }

    #[test]
    fn test_extraction_never_fails_on_empty_input() {
        let doc = extract("");
        assert_eq!(doc.name, "CV");
        assert_eq!(doc.role_line, "");
        assert!(doc.contacts.is_empty());
        assert_eq!(doc.primary_body, "");
        assert_eq!(doc.secondary_body, "## Technical Skills\n");
    }
}
