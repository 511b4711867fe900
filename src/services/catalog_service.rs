//! Catalog service - topics, software, images, dashboard stats.
//!
//! All mutations are admin-gated at the route level; the read side
//! projects through the visibility resolver where it matters.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::DASHBOARD_LIST_SIZE;
use crate::domain::{
    AppImage, AppRole, Content, ContentStatus, ImageDraft, Software, SoftwareDraft, Topic,
    TopicDraft, TopicStatus, Visibility,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Aggregate numbers for the admin dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_topics: u64,
    pub total_contents: u64,
    pub total_copies: i64,
    pub recent_contents: Vec<Content>,
    pub top_contents: Vec<Content>,
}

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Topics visible to the given role, with derived content counts
    async fn visible_topics(&self, role: Option<AppRole>)
        -> AppResult<Vec<Topic>>;

    /// One topic, or NotFound when hidden from the role
    async fn visible_topic(
        &self,
        role: Option<AppRole>,
        id: Uuid,
    ) -> AppResult<Topic>;

    /// Create a topic
    async fn create_topic(&self, draft: TopicDraft) -> AppResult<Topic>;

    /// Update a topic
    async fn update_topic(&self, id: Uuid, draft: TopicDraft) -> AppResult<Topic>;

    /// Delete a topic; its content is left orphaned (and visible)
    async fn delete_topic(&self, id: Uuid) -> AppResult<()>;

    /// All software entries
    async fn list_software(&self) -> AppResult<Vec<Software>>;

    /// Active software entries only
    async fn active_software(&self) -> AppResult<Vec<Software>>;

    /// Create a software entry
    async fn create_software(&self, draft: SoftwareDraft) -> AppResult<Software>;

    /// Update a software entry
    async fn update_software(&self, id: Uuid, draft: SoftwareDraft) -> AppResult<Software>;

    /// Delete a software entry
    async fn delete_software(&self, id: Uuid) -> AppResult<()>;

    /// All images, newest first
    async fn list_images(&self) -> AppResult<Vec<AppImage>>;

    /// Create an image entry
    async fn create_image(&self, draft: ImageDraft) -> AppResult<AppImage>;

    /// Update an image entry
    async fn update_image(&self, id: Uuid, draft: ImageDraft) -> AppResult<AppImage>;

    /// Delete an image entry (never happens implicitly)
    async fn delete_image(&self, id: Uuid) -> AppResult<()>;

    /// Aggregate dashboard numbers
    async fn dashboard_stats(&self) -> AppResult<DashboardStats>;
}

/// Derive per-topic published-content counts.
fn with_content_counts(mut topics: Vec<Topic>, contents: &[Content]) -> Vec<Topic> {
    for topic in &mut topics {
        topic.content_count = contents
            .iter()
            .filter(|c| c.topic_id == Some(topic.id) && c.status == ContentStatus::Published)
            .count() as u64;
    }
    topics
}

/// Concrete implementation of CatalogService.
pub struct Catalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Catalog<U> {
    /// Create new catalog service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for Catalog<U> {
    async fn visible_topics(
        &self,
        role: Option<AppRole>,
    ) -> AppResult<Vec<Topic>> {
        let topics = self.uow.topics().list().await?;
        let contents = self.uow.contents().list().await?;

        let visibility = Visibility::new(role, &topics, &contents);
        let visible: Vec<Topic> = visibility.visible_topics().into_iter().cloned().collect();

        Ok(with_content_counts(visible, &contents))
    }

    async fn visible_topic(
        &self,
        role: Option<AppRole>,
        id: Uuid,
    ) -> AppResult<Topic> {
        self.visible_topics(role)
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(AppError::NotFound)
    }

    async fn create_topic(&self, draft: TopicDraft) -> AppResult<Topic> {
        self.uow.topics().insert(draft).await
    }

    async fn update_topic(&self, id: Uuid, draft: TopicDraft) -> AppResult<Topic> {
        self.uow.topics().update(id, draft).await
    }

    async fn delete_topic(&self, id: Uuid) -> AppResult<()> {
        self.uow.topics().delete(id).await
    }

    async fn list_software(&self) -> AppResult<Vec<Software>> {
        self.uow.software().list().await
    }

    async fn active_software(&self) -> AppResult<Vec<Software>> {
        Ok(self
            .uow
            .software()
            .list()
            .await?
            .into_iter()
            .filter(|s| s.status == TopicStatus::Active)
            .collect())
    }

    async fn create_software(&self, draft: SoftwareDraft) -> AppResult<Software> {
        self.uow.software().insert(draft).await
    }

    async fn update_software(&self, id: Uuid, draft: SoftwareDraft) -> AppResult<Software> {
        self.uow.software().update(id, draft).await
    }

    async fn delete_software(&self, id: Uuid) -> AppResult<()> {
        self.uow.software().delete(id).await
    }

    async fn list_images(&self) -> AppResult<Vec<AppImage>> {
        self.uow.images().list().await
    }

    async fn create_image(&self, draft: ImageDraft) -> AppResult<AppImage> {
        self.uow.images().insert(draft).await
    }

    async fn update_image(&self, id: Uuid, draft: ImageDraft) -> AppResult<AppImage> {
        self.uow.images().update(id, draft).await
    }

    async fn delete_image(&self, id: Uuid) -> AppResult<()> {
        self.uow.images().delete(id).await
    }

    async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        let topics = self.uow.topics().list().await?;
        // Already ordered newest first
        let contents = self.uow.contents().list().await?;

        let total_copies = contents.iter().map(|c| c.copy_count).sum();
        let recent_contents: Vec<Content> =
            contents.iter().take(DASHBOARD_LIST_SIZE).cloned().collect();

        let mut by_copies = contents.clone();
        by_copies.sort_by(|a, b| b.copy_count.cmp(&a.copy_count));
        by_copies.truncate(DASHBOARD_LIST_SIZE);

        Ok(DashboardStats {
            total_topics: topics.len() as u64,
            total_contents: contents.len() as u64,
            total_copies,
            recent_contents,
            top_contents: by_copies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn topic(id: Uuid) -> Topic {
        Topic {
            id,
            name: "t".to_string(),
            name_vi: "t".to_string(),
            description: String::new(),
            icon: "Star".to_string(),
            color: "primary".to_string(),
            status: TopicStatus::Active,
            content_count: 0,
            created_at: Utc::now(),
        }
    }

    fn content(topic_id: Option<Uuid>, status: ContentStatus) -> Content {
        let now = Utc::now();
        Content {
            id: Uuid::new_v4(),
            title: "c".to_string(),
            body: String::new(),
            topic_id,
            software_id: None,
            platforms: vec![],
            purpose: String::new(),
            status,
            image_url: None,
            copy_count: 0,
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_content_counts_published_only() {
        let id = Uuid::new_v4();
        let topics = vec![topic(id)];
        let contents = vec![
            content(Some(id), ContentStatus::Published),
            content(Some(id), ContentStatus::Published),
            content(Some(id), ContentStatus::Draft),
            content(None, ContentStatus::Published),
        ];

        let counted = with_content_counts(topics, &contents);
        assert_eq!(counted[0].content_count, 2);
    }
}
