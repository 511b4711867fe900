//! Topic category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Topic visibility gate, independent of account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    Active,
    Hidden,
}

impl TopicStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "hidden" => TopicStatus::Hidden,
            _ => TopicStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Active => "active",
            TopicStatus::Hidden => "hidden",
        }
    }
}

/// Content category. `content_count` is derived from the content
/// collection at read time and never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    pub name_vi: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub status: TopicStatus,
    pub content_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a topic (admin only).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TopicDraft {
    pub name: String,
    pub name_vi: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub status: TopicStatus,
}
