//! Banner service - homepage carousel management and rotation.

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{BannerDraft, ProgramBanner};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Banner service trait for dependency injection.
#[async_trait]
pub trait BannerService: Send + Sync {
    /// Banners currently displayable: active status, inside the
    /// validity window, ordered by order_index. With `shuffle` the
    /// order is randomized at request time instead.
    async fn live_banners(&self, shuffle: bool) -> AppResult<Vec<ProgramBanner>>;

    /// All banners for the admin table, ordered by order_index
    async fn list_banners(&self) -> AppResult<Vec<ProgramBanner>>;

    /// Create a banner, appended at the end of the display order
    async fn create_banner(&self, draft: BannerDraft) -> AppResult<ProgramBanner>;

    /// Update a banner (display position unchanged)
    async fn update_banner(&self, id: Uuid, draft: BannerDraft) -> AppResult<ProgramBanner>;

    /// Delete a banner
    async fn delete_banner(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BannerService.
pub struct BannerBoard<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BannerBoard<U> {
    /// Create new banner service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BannerService for BannerBoard<U> {
    async fn live_banners(&self, shuffle: bool) -> AppResult<Vec<ProgramBanner>> {
        let now = Utc::now();
        let mut banners: Vec<ProgramBanner> = self
            .uow
            .banners()
            .list()
            .await?
            .into_iter()
            .filter(|b| b.is_live(now))
            .collect();

        if shuffle {
            banners.shuffle(&mut rand::thread_rng());
        }

        Ok(banners)
    }

    async fn list_banners(&self) -> AppResult<Vec<ProgramBanner>> {
        self.uow.banners().list().await
    }

    async fn create_banner(&self, draft: BannerDraft) -> AppResult<ProgramBanner> {
        let order_index = self.uow.banners().count().await? as i32;
        self.uow.banners().insert(draft, order_index).await
    }

    async fn update_banner(&self, id: Uuid, draft: BannerDraft) -> AppResult<ProgramBanner> {
        self.uow.banners().update(id, draft).await
    }

    async fn delete_banner(&self, id: Uuid) -> AppResult<()> {
        self.uow.banners().delete(id).await
    }
}
