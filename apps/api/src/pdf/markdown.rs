//! Markdown-to-HTML rendering, wrapped so the composer treats the output as
//! an opaque fragment.

use pulldown_cmark::{html, Options, Parser};

/// Renders a markdown fragment to embeddable HTML. Total for any text input.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Escapes text interpolated directly into the composed document (name,
/// role, contact labels and targets). Fragment HTML from `to_html` is never
/// passed through this.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
