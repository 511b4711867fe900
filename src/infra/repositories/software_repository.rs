//! Software repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::software::{self, Entity as SoftwareEntity};
use crate::domain::{Software, SoftwareDraft};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository for software rows.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SoftwareRepository: Send + Sync {
    /// List all software in insertion order
    async fn list(&self) -> AppResult<Vec<Software>>;

    /// Find software by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Software>>;

    /// Insert a new software entry
    async fn insert(&self, draft: SoftwareDraft) -> AppResult<Software>;

    /// Replace the editable fields of a software entry
    async fn update(&self, id: Uuid, draft: SoftwareDraft) -> AppResult<Software>;

    /// Delete software by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of SoftwareRepository
pub struct SoftwareStore {
    db: DatabaseConnection,
}

impl SoftwareStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SoftwareRepository for SoftwareStore {
    async fn list(&self) -> AppResult<Vec<Software>> {
        let models = SoftwareEntity::find()
            .order_by_asc(software::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Software::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Software>> {
        let result = SoftwareEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Software::from))
    }

    async fn insert(&self, draft: SoftwareDraft) -> AppResult<Software> {
        let model = software::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            description: Set(draft.description),
            tag: Set(draft.tag),
            status: Set(draft.status.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(Software::from(model))
    }

    async fn update(&self, id: Uuid, draft: SoftwareDraft) -> AppResult<Software> {
        let existing = SoftwareEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: software::ActiveModel = existing.into();
        active.name = Set(draft.name);
        active.description = Set(draft.description);
        active.tag = Set(draft.tag);
        active.status = Set(draft.status.as_str().to_string());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Software::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = SoftwareEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
