//! Library image repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::app_image::{self, Entity as ImageEntity};
use crate::domain::{AppImage, ImageDraft};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository for image rows. Images are never removed implicitly;
/// deleting content leaves its images behind.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// List all images, newest upload first
    async fn list(&self) -> AppResult<Vec<AppImage>>;

    /// Find image by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AppImage>>;

    /// Insert a new image
    async fn insert(&self, draft: ImageDraft) -> AppResult<AppImage>;

    /// Replace the editable fields of an image
    async fn update(&self, id: Uuid, draft: ImageDraft) -> AppResult<AppImage>;

    /// Delete image by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ImageRepository
pub struct ImageStore {
    db: DatabaseConnection,
}

impl ImageStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepository for ImageStore {
    async fn list(&self) -> AppResult<Vec<AppImage>> {
        let models = ImageEntity::find()
            .order_by_desc(app_image::Column::UploadedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(AppImage::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AppImage>> {
        let result = ImageEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AppImage::from))
    }

    async fn insert(&self, draft: ImageDraft) -> AppResult<AppImage> {
        let model = app_image::ActiveModel {
            id: Set(Uuid::new_v4()),
            url: Set(draft.url),
            content_id: Set(draft.content_id),
            content_title: Set(draft.content_title),
            description: Set(draft.description),
            uploaded_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(AppImage::from(model))
    }

    async fn update(&self, id: Uuid, draft: ImageDraft) -> AppResult<AppImage> {
        let existing = ImageEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: app_image::ActiveModel = existing.into();
        active.url = Set(draft.url);
        active.content_id = Set(draft.content_id);
        active.content_title = Set(draft.content_title);
        active.description = Set(draft.description);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(AppImage::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ImageEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
