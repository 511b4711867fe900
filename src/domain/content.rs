//! Content entity: the primary unit of the library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Publication gate for content, independent of account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Published,
}

impl ContentStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "published" => ContentStatus::Published,
            _ => ContentStatus::Draft,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
        }
    }
}

/// A reusable piece of marketing copy.
///
/// `topic_id` may reference a topic that no longer exists; such orphaned
/// content remains visible (see `domain::visibility`). `copy_count` only
/// ever increases.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub topic_id: Option<Uuid>,
    pub software_id: Option<Uuid>,
    pub platforms: Vec<String>,
    pub purpose: String,
    pub status: ContentStatus,
    pub image_url: Option<String>,
    pub copy_count: i64,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating content.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContentDraft {
    pub title: String,
    pub body: String,
    pub topic_id: Option<Uuid>,
    pub software_id: Option<Uuid>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub purpose: String,
    pub status: ContentStatus,
    pub image_url: Option<String>,
    pub owner_id: Option<Uuid>,
}

/// Partial update for content; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic_id: Option<Option<Uuid>>,
    pub software_id: Option<Option<Uuid>>,
    pub platforms: Option<Vec<String>>,
    pub purpose: Option<String>,
    pub status: Option<ContentStatus>,
    pub image_url: Option<Option<String>>,
}

/// Result of a copy action: the personalized text plus the new counter.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CopyResponse {
    pub text: String,
    pub copy_count: i64,
}
