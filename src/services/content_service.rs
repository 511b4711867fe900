//! Content service - library listings, authoring, publication, copying.
//!
//! Listings go through the visibility resolver; mutations go through
//! the permission policy. Every successful mutation is published to the
//! content change feed.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    authorize, Action, Actor, Content, ContentDraft, ContentPatch, ContentStatus, CopyResponse,
    Visibility,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{ContentFeed, NewContent, UnitOfWork};

use super::auth_service::CurrentUser;
use super::profile_service::build_copy_text;

/// Content service trait for dependency injection.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Contents visible to the actor: everything for admin, published
    /// with a visible topic otherwise
    async fn list_visible(&self, actor: Actor) -> AppResult<Vec<Content>>;

    /// Published contents only, for public-facing listings; drafts are
    /// excluded even for admin
    async fn list_published(&self, actor: Actor) -> AppResult<Vec<Content>>;

    /// Contents of one topic; empty when the topic is not visible
    async fn list_by_topic(&self, actor: Actor, topic_id: Uuid) -> AppResult<Vec<Content>>;

    /// One content item, or NotFound when it is invisible to the actor
    async fn get_visible(&self, actor: Actor, id: Uuid) -> AppResult<Content>;

    /// The caller's own contents whose topic is still visible
    async fn my_contents(&self, user: &CurrentUser) -> AppResult<Vec<Content>>;

    /// Create content. Editors always produce drafts they own; admins
    /// may create in any status for any owner.
    async fn create(&self, user: &CurrentUser, draft: ContentDraft) -> AppResult<Content>;

    /// Apply a partial update under the ownership policy
    async fn update(&self, user: &CurrentUser, id: Uuid, patch: ContentPatch)
        -> AppResult<Content>;

    /// Flip content to published (admin only)
    async fn publish(&self, user: &CurrentUser, id: Uuid) -> AppResult<Content>;

    /// Delete content (admin only)
    async fn delete(&self, user: &CurrentUser, id: Uuid) -> AppResult<()>;

    /// Copy: personalized text plus an atomic counter increment.
    /// Requires an authenticated actor.
    async fn copy(&self, user: &CurrentUser, id: Uuid) -> AppResult<CopyResponse>;
}

/// Concrete implementation of ContentService.
pub struct ContentLibrary<U: UnitOfWork> {
    uow: Arc<U>,
    feed: Arc<ContentFeed>,
}

impl<U: UnitOfWork> ContentLibrary<U> {
    /// Create new content service instance
    pub fn new(uow: Arc<U>, feed: Arc<ContentFeed>) -> Self {
        Self { uow, feed }
    }

    /// Load the collections the visibility resolver operates on.
    async fn load(&self) -> AppResult<(Vec<crate::domain::Topic>, Vec<Content>)> {
        let topics = self.uow.topics().list().await?;
        let contents = self.uow.contents().list().await?;
        Ok((topics, contents))
    }
}

#[async_trait]
impl<U: UnitOfWork> ContentService for ContentLibrary<U> {
    async fn list_visible(&self, actor: Actor) -> AppResult<Vec<Content>> {
        let (topics, contents) = self.load().await?;
        let visibility = Visibility::new(actor.role, &topics, &contents);
        Ok(visibility.visible_contents().into_iter().cloned().collect())
    }

    async fn list_published(&self, actor: Actor) -> AppResult<Vec<Content>> {
        let (topics, contents) = self.load().await?;
        let visibility = Visibility::new(actor.role, &topics, &contents);
        Ok(visibility
            .visible_published_contents()
            .into_iter()
            .cloned()
            .collect())
    }

    async fn list_by_topic(&self, actor: Actor, topic_id: Uuid) -> AppResult<Vec<Content>> {
        let (topics, contents) = self.load().await?;
        let visibility = Visibility::new(actor.role, &topics, &contents);
        Ok(visibility
            .visible_contents_by_topic(&topic_id)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get_visible(&self, actor: Actor, id: Uuid) -> AppResult<Content> {
        let (topics, contents) = self.load().await?;
        let visibility = Visibility::new(actor.role, &topics, &contents);

        if !visibility.is_content_visible(&id) {
            return Err(AppError::NotFound);
        }

        contents
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)
    }

    async fn my_contents(&self, user: &CurrentUser) -> AppResult<Vec<Content>> {
        let (topics, contents) = self.load().await?;
        let visibility = Visibility::new(user.role, &topics, &contents);

        Ok(contents
            .iter()
            .filter(|c| c.owner_id == Some(user.id))
            .filter(|c| match c.topic_id {
                Some(topic_id) => visibility.is_topic_visible(&topic_id),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create(&self, user: &CurrentUser, draft: ContentDraft) -> AppResult<Content> {
        let actor = user.actor();
        if !authorize(&actor, Action::CreateContent) {
            return Err(AppError::Forbidden);
        }

        // Editors always start from a draft they own; admins choose
        let (status, owner_id) = if actor.is_admin() {
            (draft.status, draft.owner_id.or(Some(user.id)))
        } else {
            (ContentStatus::Draft, Some(user.id))
        };

        let content = self
            .uow
            .contents()
            .insert(NewContent {
                title: draft.title,
                body: draft.body,
                topic_id: draft.topic_id,
                software_id: draft.software_id,
                platforms: draft.platforms,
                purpose: draft.purpose,
                status,
                image_url: draft.image_url,
                owner_id,
            })
            .await?;

        self.feed.inserted(content.clone());
        Ok(content)
    }

    async fn update(
        &self,
        user: &CurrentUser,
        id: Uuid,
        patch: ContentPatch,
    ) -> AppResult<Content> {
        let actor = user.actor();
        let existing = self
            .uow
            .contents()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if !actor.can_edit_content(existing.owner_id) {
            return Err(AppError::Forbidden);
        }

        // Publication is a separate admin-only privilege
        if patch.status == Some(ContentStatus::Published) && !actor.can_publish_content() {
            return Err(AppError::Forbidden);
        }

        let content = self.uow.contents().update(id, patch).await?;
        self.feed.updated(content.clone());
        Ok(content)
    }

    async fn publish(&self, user: &CurrentUser, id: Uuid) -> AppResult<Content> {
        if !user.actor().can_publish_content() {
            return Err(AppError::Forbidden);
        }

        let patch = ContentPatch {
            status: Some(ContentStatus::Published),
            ..Default::default()
        };

        let content = self.uow.contents().update(id, patch).await?;
        self.feed.updated(content.clone());
        Ok(content)
    }

    async fn delete(&self, user: &CurrentUser, id: Uuid) -> AppResult<()> {
        if !authorize(&user.actor(), Action::DeleteContent) {
            return Err(AppError::Forbidden);
        }

        self.uow.contents().delete(id).await?;
        self.feed.deleted(id);
        Ok(())
    }

    async fn copy(&self, user: &CurrentUser, id: Uuid) -> AppResult<CopyResponse> {
        let actor = user.actor();
        if !authorize(&actor, Action::CopyContent) {
            return Err(AppError::Unauthorized);
        }

        // Only visible content can be copied
        let content = self.get_visible(actor, id).await?;

        let updated = self.uow.contents().increment_copy_count(content.id).await?;
        self.feed.updated(updated.clone());

        let settings = self
            .uow
            .users()
            .profile(user.id)
            .await?
            .map(|p| p.settings())
            .unwrap_or_default();

        Ok(CopyResponse {
            text: build_copy_text(&updated.body, &settings),
            copy_count: updated.copy_count,
        })
    }
}
