use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::documents::store;
use crate::errors::AppError;
use crate::models::cv::{CvDocumentRow, CvSummaryRow};
use crate::pdf::{self, styles::Style};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCvRequest {
    pub title: String,
    pub markdown_content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCvRequest {
    pub title: Option<String>,
    pub markdown_content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    pub style: String,
}

/// POST /api/cv
pub async fn handle_create_cv(
    State(state): State<AppState>,
    Json(req): Json<CreateCvRequest>,
) -> Result<(StatusCode, Json<CvDocumentRow>), AppError> {
    require_non_empty(&req.title, "title")?;
    require_non_empty(&req.markdown_content, "markdown_content")?;

    let cv = store::create_cv(&state.db, &req.title, &req.markdown_content).await?;
    info!(id = %cv.id, "Created CV document");
    Ok((StatusCode::CREATED, Json(cv)))
}

/// GET /api/cv
pub async fn handle_list_cvs(
    State(state): State<AppState>,
) -> Result<Json<Vec<CvSummaryRow>>, AppError> {
    let cvs = store::list_cvs(&state.db).await?;
    Ok(Json(cvs))
}

/// GET /api/cv/:id
pub async fn handle_get_cv(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CvDocumentRow>, AppError> {
    let cv = store::get_cv(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CV {id} not found")))?;
    Ok(Json(cv))
}

/// PUT /api/cv/:id
pub async fn handle_update_cv(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCvRequest>,
) -> Result<Json<CvDocumentRow>, AppError> {
    if let Some(title) = &req.title {
        require_non_empty(title, "title")?;
    }
    if let Some(markdown) = &req.markdown_content {
        require_non_empty(markdown, "markdown_content")?;
    }

    let cv = store::update_cv(
        &state.db,
        id,
        req.title.as_deref(),
        req.markdown_content.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("CV {id} not found")))?;

    Ok(Json(cv))
}

/// DELETE /api/cv/:id
pub async fn handle_delete_cv(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !store::delete_cv(&state.db, id).await? {
        return Err(AppError::NotFound(format!("CV {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/cv/:id/generate
/// Resolves the style name at the boundary, runs the generation core, and
/// streams the PDF back as an attachment.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GeneratePdfRequest>,
) -> Result<(HeaderMap, Bytes), AppError> {
    // Unknown style names are a caller error, rejected before any work.
    let style = Style::from_name(&req.style)?;
    let cv = store::get_cv(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CV {id} not found")))?;

    let bytes = pdf::generate_pdf(&cv.markdown_content, style, state.engine.as_ref()).await?;
    info!(id = %cv.id, %style, size = bytes.len(), "Generated CV PDF");

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&attachment_disposition(&cv.title, style))
            .map_err(|_| AppError::Validation("Title produces an invalid filename".to_string()))?,
    );

    Ok((headers, Bytes::from(bytes)))
}

fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn attachment_disposition(title: &str, style: Style) -> String {
    format!("attachment; filename=\"{title}_{style}.pdf\"")
}
