//! Activation request entity: a pending user's ask for admin review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    Sent,
    Approved,
    Rejected,
}

impl ActivationStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "approved" => ActivationStatus::Approved,
            "rejected" => ActivationStatus::Rejected,
            _ => ActivationStatus::Sent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationStatus::Sent => "sent",
            ActivationStatus::Approved => "approved",
            ActivationStatus::Rejected => "rejected",
        }
    }
}

/// Tracked separately from profile status. At most one `sent` request
/// exists per user (partial unique index in the store).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivationRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_email: String,
    pub status: ActivationStatus,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub processed_by: Option<Uuid>,
}
