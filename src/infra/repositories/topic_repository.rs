//! Topic repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::topic::{self, Entity as TopicEntity};
use crate::domain::{Topic, TopicDraft};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository for topic rows. Listing order is insertion order
/// (creation time ascending); callers do not resort.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// List all topics in insertion order
    async fn list(&self) -> AppResult<Vec<Topic>>;

    /// Find topic by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Topic>>;

    /// Insert a new topic
    async fn insert(&self, draft: TopicDraft) -> AppResult<Topic>;

    /// Replace the editable fields of a topic
    async fn update(&self, id: Uuid, draft: TopicDraft) -> AppResult<Topic>;

    /// Delete topic by ID. Content referencing it is left in place.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of TopicRepository
pub struct TopicStore {
    db: DatabaseConnection,
}

impl TopicStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicStore {
    async fn list(&self) -> AppResult<Vec<Topic>> {
        let models = TopicEntity::find()
            .order_by_asc(topic::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Topic::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Topic>> {
        let result = TopicEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Topic::from))
    }

    async fn insert(&self, draft: TopicDraft) -> AppResult<Topic> {
        let model = topic::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            name_vi: Set(draft.name_vi),
            description: Set(draft.description),
            icon: Set(draft.icon),
            color: Set(draft.color),
            status: Set(draft.status.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        Ok(Topic::from(model))
    }

    async fn update(&self, id: Uuid, draft: TopicDraft) -> AppResult<Topic> {
        let existing = TopicEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: topic::ActiveModel = existing.into();
        active.name = Set(draft.name);
        active.name_vi = Set(draft.name_vi);
        active.description = Set(draft.description);
        active.icon = Set(draft.icon);
        active.color = Set(draft.color);
        active.status = Set(draft.status.as_str().to_string());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Topic::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = TopicEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
