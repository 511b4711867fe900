//! Program banner repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::program_banner::{self, Entity as BannerEntity};
use crate::domain::{BannerDraft, ProgramBanner};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository for banner rows, ordered by `order_index`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// List all banners ordered by order_index ascending
    async fn list(&self) -> AppResult<Vec<ProgramBanner>>;

    /// Find banner by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProgramBanner>>;

    /// Insert a new banner at the given order position
    async fn insert(&self, draft: BannerDraft, order_index: i32) -> AppResult<ProgramBanner>;

    /// Replace the editable fields of a banner (order_index untouched)
    async fn update(&self, id: Uuid, draft: BannerDraft) -> AppResult<ProgramBanner>;

    /// Delete banner by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Number of banner rows
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of BannerRepository
pub struct BannerStore {
    db: DatabaseConnection,
}

impl BannerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BannerRepository for BannerStore {
    async fn list(&self) -> AppResult<Vec<ProgramBanner>> {
        let models = BannerEntity::find()
            .order_by_asc(program_banner::Column::OrderIndex)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ProgramBanner::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProgramBanner>> {
        let result = BannerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ProgramBanner::from))
    }

    async fn insert(&self, draft: BannerDraft, order_index: i32) -> AppResult<ProgramBanner> {
        let model = program_banner::ActiveModel {
            id: Set(Uuid::new_v4()),
            image_url: Set(draft.image_url),
            link_url: Set(draft.link_url),
            title: Set(draft.title),
            status: Set(draft.status.as_str().to_string()),
            order_index: Set(order_index),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(ProgramBanner::from(model))
    }

    async fn update(&self, id: Uuid, draft: BannerDraft) -> AppResult<ProgramBanner> {
        let existing = BannerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: program_banner::ActiveModel = existing.into();
        active.image_url = Set(draft.image_url);
        active.link_url = Set(draft.link_url);
        active.title = Set(draft.title);
        active.status = Set(draft.status.as_str().to_string());
        active.start_date = Set(draft.start_date);
        active.end_date = Set(draft.end_date);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(ProgramBanner::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = BannerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        BannerEntity::find()
            .count(&self.db)
            .await
            .map_err(Into::into)
    }
}
