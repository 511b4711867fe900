//! Activation request repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::{activation_request, profile};
use crate::domain::{AccountStatus, ActivationRequest, ActivationStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository for the activation request lifecycle.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ActivationRepository: Send + Sync {
    /// Create a `sent` request. The partial unique index allows at most
    /// one open request per user; a duplicate surfaces as a conflict.
    async fn create(&self, user_id: Uuid, user_email: String) -> AppResult<ActivationRequest>;

    /// All open (`sent`) requests, newest first
    async fn list_sent(&self) -> AppResult<Vec<ActivationRequest>>;

    /// Approve: flip the profile to active and resolve the open request,
    /// stamping the processing admin (transactional)
    async fn approve(&self, user_id: Uuid, processed_by: Uuid) -> AppResult<()>;

    /// Resolve the user's open request without touching the profile
    async fn mark_processed(
        &self,
        user_id: Uuid,
        status: ActivationStatus,
        processed_by: Uuid,
    ) -> AppResult<()>;
}

/// Concrete implementation of ActivationRepository
pub struct ActivationStore {
    db: DatabaseConnection,
}

impl ActivationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivationRepository for ActivationStore {
    async fn create(&self, user_id: Uuid, user_email: String) -> AppResult<ActivationRequest> {
        let model = activation_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            user_email: Set(user_email),
            status: Set(ActivationStatus::Sent.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
            processed_at: Set(None),
            processed_by: Set(None),
        }
        .insert(&self.db)
        .await
        .map_err(|e| AppError::from_db(e, "Activation request"))?;

        Ok(ActivationRequest::from(model))
    }

    async fn list_sent(&self) -> AppResult<Vec<ActivationRequest>> {
        let models = activation_request::Entity::find()
            .filter(activation_request::Column::Status.eq(ActivationStatus::Sent.as_str()))
            .order_by_desc(activation_request::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ActivationRequest::from).collect())
    }

    async fn approve(&self, user_id: Uuid, processed_by: Uuid) -> AppResult<()> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let account = profile::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: profile::ActiveModel = account.into();
        active.status = Set(AccountStatus::Active.as_str().to_string());
        active.updated_at = Set(chrono::Utc::now());
        active.update(&txn).await.map_err(AppError::from)?;

        resolve_sent(&txn, user_id, ActivationStatus::Approved, processed_by).await?;

        txn.commit().await.map_err(AppError::from)?;
        Ok(())
    }

    async fn mark_processed(
        &self,
        user_id: Uuid,
        status: ActivationStatus,
        processed_by: Uuid,
    ) -> AppResult<()> {
        resolve_sent(&self.db, user_id, status, processed_by).await
    }
}

/// Resolve the user's open request, if one exists.
async fn resolve_sent<C: sea_orm::ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    status: ActivationStatus,
    processed_by: Uuid,
) -> AppResult<()> {
    use sea_orm::sea_query::Expr;

    activation_request::Entity::update_many()
        .col_expr(
            activation_request::Column::Status,
            Expr::value(status.as_str()),
        )
        .col_expr(
            activation_request::Column::ProcessedAt,
            Expr::value(chrono::Utc::now()),
        )
        .col_expr(
            activation_request::Column::ProcessedBy,
            Expr::value(processed_by),
        )
        .filter(activation_request::Column::UserId.eq(user_id))
        .filter(activation_request::Column::Status.eq(ActivationStatus::Sent.as_str()))
        .exec(conn)
        .await
        .map_err(AppError::from)?;

    Ok(())
}
