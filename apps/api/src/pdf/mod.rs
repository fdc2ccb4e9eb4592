// CV generation core.
// Pipeline: markdown → section extraction → content split → composition →
// page capture. Parsing is best-effort and never fails; only the style
// lookup and the rendering engine can error.

pub mod compose;
pub mod contacts;
pub mod engine;
pub mod markdown;
pub mod sections;
pub mod styles;

use tracing::debug;

use crate::errors::AppError;
use crate::pdf::engine::{PageEngine, PageOptions};
use crate::pdf::styles::Style;

/// Turns CV markdown into a print-ready A4 PDF in the given style.
///
/// All intermediate state is built fresh per call and discarded; the only
/// shared input is the static style registry.
pub async fn generate_pdf(
    markdown: &str,
    style: Style,
    engine: &dyn PageEngine,
) -> Result<Vec<u8>, AppError> {
    let doc = sections::extract(markdown);
    debug!(
        name = %doc.name,
        contacts = doc.contacts.len(),
        style = %style,
        "Composing CV document"
    );

    let html = compose::compose(&doc, style);
    let options = PageOptions::a4(style.page_margins());

    engine
        .render(&html, &options)
        .await
        .map_err(|e| AppError::Render(e.to_string()))
}
