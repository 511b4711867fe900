//! Library image entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An uploaded image, optionally associated with a content record.
/// Deleting content never cascades here; images are removed only by
/// explicit admin action.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AppImage {
    pub id: Uuid,
    pub url: String,
    pub content_id: Option<Uuid>,
    pub content_title: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating an image.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImageDraft {
    pub url: String,
    pub content_id: Option<Uuid>,
    pub content_title: String,
    pub description: Option<String>,
}
