//! Service Container - Centralized service construction and access.
//!
//! Builds every application service over one shared Unit of Work and
//! hands them out as trait objects for dependency injection.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, BannerBoard, BannerService, Catalog, CatalogService,
    ContentLibrary, ContentService, ProfileManager, ProfileService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{ContentFeed, Persistence};

/// Concrete service container
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    profile_service: Arc<dyn ProfileService>,
    content_service: Arc<dyn ContentService>,
    catalog_service: Arc<dyn CatalogService>,
    banner_service: Arc<dyn BannerService>,
    feed: Arc<ContentFeed>,
}

impl Services {
    /// Create service container from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let feed = Arc::new(ContentFeed::new());

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            profile_service: Arc::new(ProfileManager::new(uow.clone())),
            content_service: Arc::new(ContentLibrary::new(uow.clone(), feed.clone())),
            catalog_service: Arc::new(Catalog::new(uow.clone())),
            banner_service: Arc::new(BannerBoard::new(uow)),
            feed,
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    pub fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }

    pub fn contents(&self) -> Arc<dyn ContentService> {
        self.content_service.clone()
    }

    pub fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    pub fn banners(&self) -> Arc<dyn BannerService> {
        self.banner_service.clone()
    }

    pub fn feed(&self) -> Arc<ContentFeed> {
        self.feed.clone()
    }
}
