//! Contact Normalizer — classifies a contact value and derives a clickable target.

use serde::{Deserialize, Serialize};

/// A single entry from the `**Contact:**` block of a CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    /// Always a valid link target: `mailto:` for addresses, `https://`
    /// prepended for bare hosts, otherwise the value unchanged.
    pub href: String,
}

/// Builds a `ContactEntry` from a label and a raw value. Total — no failure path.
pub fn normalize(label: &str, value: &str) -> ContactEntry {
    let href = if value.contains('@') {
        format!("mailto:{value}")
    } else if !value.starts_with("http") {
        format!("https://{value}")
    } else {
        value.to_string()
    };

    ContactEntry {
        label: label.to_string(),
        value: value.to_string(),
        href,
    }
}
