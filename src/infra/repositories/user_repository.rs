//! Account repository: users, profiles, and role assignments.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::{activation_request, profile, user, user_role};
use crate::config::STATUS_PENDING;
use crate::domain::{AccountStatus, AppRole, Profile, ProfileSettings, User, UserAccount};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository for identity, profile, and role rows.
///
/// A user always has exactly one profile (created in the same
/// transaction at registration) and at most one role row.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Create a user together with its pending profile (transactional)
    async fn create_account(
        &self,
        email: String,
        password_hash: String,
        full_name: Option<String>,
    ) -> AppResult<User>;

    /// Fetch the profile for a user
    async fn profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// Fetch the assigned role for a user, if any
    async fn role(&self, user_id: Uuid) -> AppResult<Option<AppRole>>;

    /// List all profiles joined with their roles, newest first
    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>>;

    /// Update the user-editable profile fields
    async fn update_profile_settings(
        &self,
        user_id: Uuid,
        settings: ProfileSettings,
    ) -> AppResult<Profile>;

    /// Set the profile status (transition validity is the caller's concern)
    async fn set_status(&self, user_id: Uuid, status: AccountStatus) -> AppResult<Profile>;

    /// Assign a role (upsert) or remove the assignment (None)
    async fn set_role(&self, user_id: Uuid, role: Option<AppRole>) -> AppResult<()>;

    /// Remove a user and everything hanging off it (transactional)
    async fn delete_account(&self, user_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create_account(
        &self,
        email: String,
        password_hash: String,
        full_name: Option<String>,
    ) -> AppResult<User> {
        let now = chrono::Utc::now();
        let id = Uuid::new_v4();

        let txn = self.db.begin().await.map_err(AppError::from)?;

        let user_model = user::ActiveModel {
            id: Set(id),
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::from_db(e, "User"))?;

        profile::ActiveModel {
            id: Set(id),
            email: Set(email),
            full_name: Set(full_name),
            phone_number: Set(None),
            signature_text: Set(None),
            status: Set(STATUS_PENDING.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(AppError::from)?;

        txn.commit().await.map_err(AppError::from)?;

        Ok(User::from(user_model))
    }

    async fn profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let result = profile::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Profile::from))
    }

    async fn role(&self, user_id: Uuid) -> AppResult<Option<AppRole>> {
        let result = user_role::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        // Unknown role values degrade to "no role" rather than erroring
        Ok(result.and_then(|r| AppRole::parse(&r.role)))
    }

    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
        let profiles = profile::Entity::find()
            .order_by_desc(profile::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let roles = user_role::Entity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(profiles
            .into_iter()
            .map(|p| {
                let role = roles
                    .iter()
                    .find(|r| r.user_id == p.id)
                    .and_then(|r| AppRole::parse(&r.role));
                UserAccount {
                    id: p.id,
                    email: p.email,
                    full_name: p.full_name,
                    status: AccountStatus::parse(&p.status),
                    role,
                    created_at: p.created_at,
                }
            })
            .collect())
    }

    async fn update_profile_settings(
        &self,
        user_id: Uuid,
        settings: ProfileSettings,
    ) -> AppResult<Profile> {
        let existing = profile::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: profile::ActiveModel = existing.into();

        if let Some(full_name) = settings.full_name {
            active.full_name = Set(Some(full_name));
        }
        if let Some(phone_number) = settings.phone_number {
            active.phone_number = Set(Some(phone_number));
        }
        if let Some(signature_text) = settings.signature_text {
            active.signature_text = Set(Some(signature_text));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Profile::from(model))
    }

    async fn set_status(&self, user_id: Uuid, status: AccountStatus) -> AppResult<Profile> {
        let existing = profile::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: profile::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Profile::from(model))
    }

    async fn set_role(&self, user_id: Uuid, role: Option<AppRole>) -> AppResult<()> {
        let existing = user_role::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match (existing, role) {
            (Some(current), Some(role)) => {
                let mut active: user_role::ActiveModel = current.into();
                active.role = Set(role.as_str().to_string());
                active.update(&self.db).await.map_err(AppError::from)?;
            }
            (None, Some(role)) => {
                user_role::ActiveModel {
                    user_id: Set(user_id),
                    role: Set(role.as_str().to_string()),
                    created_at: Set(chrono::Utc::now()),
                }
                .insert(&self.db)
                .await
                .map_err(AppError::from)?;
            }
            (Some(_), None) => {
                user_role::Entity::delete_by_id(user_id)
                    .exec(&self.db)
                    .await
                    .map_err(AppError::from)?;
            }
            (None, None) => {}
        }

        Ok(())
    }

    async fn delete_account(&self, user_id: Uuid) -> AppResult<()> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        activation_request::Entity::delete_many()
            .filter(activation_request::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        user_role::Entity::delete_by_id(user_id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        profile::Entity::delete_by_id(user_id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        let result = user::Entity::delete_by_id(user_id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            // Nothing to commit; surface the missing account
            return Err(AppError::NotFound);
        }

        txn.commit().await.map_err(AppError::from)?;
        Ok(())
    }
}
