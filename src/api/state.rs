//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure.

use std::sync::Arc;

use crate::infra::{ContentFeed, Database};
use crate::services::{
    AuthService, BannerService, CatalogService, ContentService, ProfileService, Services,
    UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub content_service: Arc<dyn ContentService>,
    pub catalog_service: Arc<dyn CatalogService>,
    pub banner_service: Arc<dyn BannerService>,
    /// Content change feed for WebSocket subscribers
    pub feed: Arc<ContentFeed>,
    /// Database connection (health checks). Absent in tests that run
    /// the router against mock services only.
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            profile_service: services.profiles(),
            content_service: services.contents(),
            catalog_service: services.catalog(),
            banner_service: services.banners(),
            feed: services.feed(),
            database: Some(database),
        }
    }

    /// Create application state with manually injected services.
    /// Used by tests that run the router without real infrastructure.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        profile_service: Arc<dyn ProfileService>,
        content_service: Arc<dyn ContentService>,
        catalog_service: Arc<dyn CatalogService>,
        banner_service: Arc<dyn BannerService>,
        feed: Arc<ContentFeed>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            profile_service,
            content_service,
            catalog_service,
            banner_service,
            feed,
            database: None,
        }
    }
}
