//! Unit of Work: centralized repository access.
//!
//! Services depend on this hub rather than on individual stores, so
//! tests can swap the whole persistence layer in one place. Operations
//! that span tables (account creation, activation approval, account
//! deletion) are transactional inside the owning store method, which
//! keeps this trait object-safe and easy to mock by hand.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    ActivationRepository, ActivationStore, BannerRepository, BannerStore, ContentRepository,
    ContentStore, ImageRepository, ImageStore, SoftwareRepository, SoftwareStore, TopicRepository,
    TopicStore, UserRepository, UserStore,
};

/// Repository hub trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get account repository (users, profiles, roles)
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get activation request repository
    fn activations(&self) -> Arc<dyn ActivationRepository>;

    /// Get topic repository
    fn topics(&self) -> Arc<dyn TopicRepository>;

    /// Get software repository
    fn software(&self) -> Arc<dyn SoftwareRepository>;

    /// Get content repository
    fn contents(&self) -> Arc<dyn ContentRepository>;

    /// Get image repository
    fn images(&self) -> Arc<dyn ImageRepository>;

    /// Get banner repository
    fn banners(&self) -> Arc<dyn BannerRepository>;
}

/// Concrete implementation of UnitOfWork backed by SeaORM stores
pub struct Persistence {
    users: Arc<UserStore>,
    activations: Arc<ActivationStore>,
    topics: Arc<TopicStore>,
    software: Arc<SoftwareStore>,
    contents: Arc<ContentStore>,
    images: Arc<ImageStore>,
    banners: Arc<BannerStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            activations: Arc::new(ActivationStore::new(db.clone())),
            topics: Arc::new(TopicStore::new(db.clone())),
            software: Arc::new(SoftwareStore::new(db.clone())),
            contents: Arc::new(ContentStore::new(db.clone())),
            images: Arc::new(ImageStore::new(db.clone())),
            banners: Arc::new(BannerStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn activations(&self) -> Arc<dyn ActivationRepository> {
        self.activations.clone()
    }

    fn topics(&self) -> Arc<dyn TopicRepository> {
        self.topics.clone()
    }

    fn software(&self) -> Arc<dyn SoftwareRepository> {
        self.software.clone()
    }

    fn contents(&self) -> Arc<dyn ContentRepository> {
        self.contents.clone()
    }

    fn images(&self) -> Arc<dyn ImageRepository> {
        self.images.clone()
    }

    fn banners(&self) -> Arc<dyn BannerRepository> {
        self.banners.clone()
    }
}
