use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored CV document. The markdown is persisted as authored; parsing
/// happens per render call, never at write time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvDocumentRow {
    pub id: Uuid,
    pub title: String,
    pub markdown_content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List-view projection without the markdown body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
