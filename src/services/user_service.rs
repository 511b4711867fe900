//! User service - admin account management and the activation lifecycle.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{AccountStatus, ActivationRequest, ActivationStatus, AppRole, Profile, UserAccount};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

use super::auth_service::CurrentUser;

/// User management service trait for dependency injection.
///
/// Everything here is admin-gated at the route level except
/// `request_activation`, which a pending user calls from the waiting
/// room.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all accounts (profiles joined with roles), newest first
    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>>;

    /// Assign a role, or remove the assignment with None
    async fn set_role(&self, user_id: Uuid, role: Option<AppRole>) -> AppResult<()>;

    /// Change a profile's status. Only pending->active and
    /// active<->locked are allowed; activating a pending user also
    /// resolves their open activation request.
    async fn set_status(
        &self,
        user_id: Uuid,
        status: AccountStatus,
        acting_admin: Uuid,
    ) -> AppResult<Profile>;

    /// A pending user asks for admin review. At most one open request
    /// exists per user; a duplicate surfaces as a conflict.
    async fn request_activation(&self, user: &CurrentUser) -> AppResult<ActivationRequest>;

    /// All open activation requests
    async fn list_activation_requests(&self) -> AppResult<Vec<ActivationRequest>>;

    /// Approve: activate the profile and resolve the request
    async fn approve_activation(&self, user_id: Uuid, acting_admin: Uuid) -> AppResult<()>;

    /// Reject the open request; the profile stays pending
    async fn reject_activation(&self, user_id: Uuid, acting_admin: Uuid) -> AppResult<()>;

    /// Remove an account and its dependent rows
    async fn delete_account(&self, user_id: Uuid, acting_admin: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
        self.uow.users().list_accounts().await
    }

    async fn set_role(&self, user_id: Uuid, role: Option<AppRole>) -> AppResult<()> {
        // The profile must exist; roles are never assigned to ghosts
        self.uow
            .users()
            .profile(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.uow.users().set_role(user_id, role).await
    }

    async fn set_status(
        &self,
        user_id: Uuid,
        status: AccountStatus,
        acting_admin: Uuid,
    ) -> AppResult<Profile> {
        let current = self
            .uow
            .users()
            .profile(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if current.status == status {
            return Ok(current);
        }

        if !current.status.can_transition_to(status) {
            return Err(AppError::validation(format!(
                "Cannot change account status from {} to {}",
                current.status, status
            )));
        }

        let was_pending = current.status == AccountStatus::Pending;
        let profile = self.uow.users().set_status(user_id, status).await?;

        // Activating a pending user implicitly answers their request
        if was_pending && status == AccountStatus::Active {
            self.uow
                .activations()
                .mark_processed(user_id, ActivationStatus::Approved, acting_admin)
                .await?;
        }

        Ok(profile)
    }

    async fn request_activation(&self, user: &CurrentUser) -> AppResult<ActivationRequest> {
        if user.status() != Some(AccountStatus::Pending) {
            return Err(AppError::validation("Account is not awaiting activation"));
        }

        self.uow
            .activations()
            .create(user.id, user.email.clone())
            .await
    }

    async fn list_activation_requests(&self) -> AppResult<Vec<ActivationRequest>> {
        self.uow.activations().list_sent().await
    }

    async fn approve_activation(&self, user_id: Uuid, acting_admin: Uuid) -> AppResult<()> {
        self.uow.activations().approve(user_id, acting_admin).await
    }

    async fn reject_activation(&self, user_id: Uuid, acting_admin: Uuid) -> AppResult<()> {
        self.uow
            .activations()
            .mark_processed(user_id, ActivationStatus::Rejected, acting_admin)
            .await
    }

    async fn delete_account(&self, user_id: Uuid, acting_admin: Uuid) -> AppResult<()> {
        // Prevent self-deletion
        if user_id == acting_admin {
            return Err(AppError::validation("Cannot delete your own account"));
        }

        self.uow.users().delete_account(user_id).await
    }
}
