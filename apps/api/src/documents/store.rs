//! Persistence for CV documents.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::{CvDocumentRow, CvSummaryRow};

pub async fn create_cv(
    pool: &PgPool,
    title: &str,
    markdown_content: &str,
) -> Result<CvDocumentRow, AppError> {
    let row: CvDocumentRow = sqlx::query_as(
        r#"
        INSERT INTO cv_documents (id, title, markdown_content, created_at, updated_at)
        VALUES ($1, $2, $3, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(markdown_content)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Summaries only, most recently updated first.
pub async fn list_cvs(pool: &PgPool) -> Result<Vec<CvSummaryRow>, AppError> {
    let rows: Vec<CvSummaryRow> = sqlx::query_as(
        "SELECT id, title, created_at, updated_at FROM cv_documents ORDER BY updated_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_cv(pool: &PgPool, id: Uuid) -> Result<Option<CvDocumentRow>, AppError> {
    let row: Option<CvDocumentRow> = sqlx::query_as("SELECT * FROM cv_documents WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Partial update: unset fields keep their current value. Bumps `updated_at`.
pub async fn update_cv(
    pool: &PgPool,
    id: Uuid,
    title: Option<&str>,
    markdown_content: Option<&str>,
) -> Result<Option<CvDocumentRow>, AppError> {
    let row: Option<CvDocumentRow> = sqlx::query_as(
        r#"
        UPDATE cv_documents
        SET title = COALESCE($2, title),
            markdown_content = COALESCE($3, markdown_content),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(markdown_content)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Returns false when no row matched the id.
pub async fn delete_cv(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM cv_documents WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
