use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::pdf::engine::PageEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Rendering engine seam. Production wires `ChromiumEngine`; tests swap
    /// in a stub without touching handlers.
    pub engine: Arc<dyn PageEngine>,
    pub config: Config,
}
