pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::documents::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/cv",
            post(handlers::handle_create_cv).get(handlers::handle_list_cvs),
        )
        .route(
            "/api/cv/:id",
            get(handlers::handle_get_cv)
                .put(handlers::handle_update_cv)
                .delete(handlers::handle_delete_cv),
        )
        .route("/api/cv/:id/generate", post(handlers::handle_generate_pdf))
        .with_state(state)
}
