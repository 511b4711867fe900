//! Software tag entity, an auxiliary label for content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::topic::TopicStatus;

/// A software product content can be tagged with. Shares the
/// active/hidden lifecycle with topics.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Software {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub tag: String,
    pub status: TopicStatus,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a software entry.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SoftwareDraft {
    pub name: String,
    pub description: String,
    pub tag: String,
    pub status: TopicStatus,
}
