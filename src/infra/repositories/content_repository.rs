//! Content repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::content::{self, Entity as ContentEntity};
use crate::domain::{Content, ContentPatch, ContentStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Everything needed to insert a content row: a draft with the
/// ownership and status rules already applied by the service layer.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: String,
    pub body: String,
    pub topic_id: Option<Uuid>,
    pub software_id: Option<Uuid>,
    pub platforms: Vec<String>,
    pub purpose: String,
    pub status: ContentStatus,
    pub image_url: Option<String>,
    pub owner_id: Option<Uuid>,
}

/// Repository for content rows. Listings come back newest first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// List all content ordered by creation time descending
    async fn list(&self) -> AppResult<Vec<Content>>;

    /// Find content by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Content>>;

    /// Insert a new content row
    async fn insert(&self, new: NewContent) -> AppResult<Content>;

    /// Apply a partial update
    async fn update(&self, id: Uuid, patch: ContentPatch) -> AppResult<Content>;

    /// Delete content by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Atomically increment the copy counter, returning the new row.
    /// The counter only ever increases.
    async fn increment_copy_count(&self, id: Uuid) -> AppResult<Content>;
}

/// Concrete implementation of ContentRepository
pub struct ContentStore {
    db: DatabaseConnection,
}

impl ContentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentStore {
    async fn list(&self) -> AppResult<Vec<Content>> {
        let models = ContentEntity::find()
            .order_by_desc(content::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Content::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Content>> {
        let result = ContentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Content::from))
    }

    async fn insert(&self, new: NewContent) -> AppResult<Content> {
        let now = chrono::Utc::now();
        let model = content::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new.title),
            body: Set(new.body),
            topic_id: Set(new.topic_id),
            software_id: Set(new.software_id),
            platforms: Set(serde_json::json!(new.platforms)),
            purpose: Set(new.purpose),
            status: Set(new.status.as_str().to_string()),
            image_url: Set(new.image_url),
            copy_count: Set(0),
            owner_id: Set(new.owner_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(Content::from(model))
    }

    async fn update(&self, id: Uuid, patch: ContentPatch) -> AppResult<Content> {
        let existing = ContentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: content::ActiveModel = existing.into();

        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(body) = patch.body {
            active.body = Set(body);
        }
        if let Some(topic_id) = patch.topic_id {
            active.topic_id = Set(topic_id);
        }
        if let Some(software_id) = patch.software_id {
            active.software_id = Set(software_id);
        }
        if let Some(platforms) = patch.platforms {
            active.platforms = Set(serde_json::json!(platforms));
        }
        if let Some(purpose) = patch.purpose {
            active.purpose = Set(purpose);
        }
        if let Some(status) = patch.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Content::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ContentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn increment_copy_count(&self, id: Uuid) -> AppResult<Content> {
        use sea_orm::sea_query::Expr;

        let result = ContentEntity::update_many()
            .col_expr(
                content::Column::CopyCount,
                Expr::col(content::Column::CopyCount).add(1),
            )
            .filter(content::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        let model = ContentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(Content::from(model))
    }
}
