//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - The content change feed
//! - Unit of Work hub for repository access

pub mod db;
pub mod feed;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use feed::{ContentChange, ContentFeed, ContentProjection, FeedEvent};
pub use repositories::{
    ActivationRepository, ActivationStore, BannerRepository, BannerStore, ContentRepository,
    ContentStore, ImageRepository, ImageStore, NewContent, SoftwareRepository, SoftwareStore,
    TopicRepository, TopicStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockActivationRepository, MockBannerRepository, MockContentRepository, MockImageRepository,
    MockSoftwareRepository, MockTopicRepository, MockUserRepository,
};
