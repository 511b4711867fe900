//! User identity and profile domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::role::{AccountStatus, AppRole};

/// Identity principal: credentials only, read-only to most of the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-to-one profile for a user. Created at registration with
/// status = pending; personalization fields are user-editable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub signature_text: Option<String>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile joined with its (optional) role, as shown in the admin
/// user-management table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub status: AccountStatus,
    pub role: Option<AppRole>,
    pub created_at: DateTime<Utc>,
}

/// The user-editable slice of a profile.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProfileSettings {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub signature_text: Option<String>,
}

impl Profile {
    pub fn settings(&self) -> ProfileSettings {
        ProfileSettings {
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            signature_text: self.signature_text.clone(),
        }
    }
}

/// Session payload returned to clients: who is acting, with what
/// profile and role.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
    pub profile: Option<Profile>,
    pub role: Option<AppRole>,
}

/// Identity slice of a session.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}
