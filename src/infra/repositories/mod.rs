//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod activation_repository;
mod banner_repository;
mod content_repository;
pub(crate) mod entities;
mod image_repository;
mod software_repository;
mod topic_repository;
mod user_repository;

pub use activation_repository::{ActivationRepository, ActivationStore};
pub use banner_repository::{BannerRepository, BannerStore};
pub use content_repository::{ContentRepository, ContentStore, NewContent};
pub use image_repository::{ImageRepository, ImageStore};
pub use software_repository::{SoftwareRepository, SoftwareStore};
pub use topic_repository::{TopicRepository, TopicStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use activation_repository::MockActivationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use banner_repository::MockBannerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use content_repository::MockContentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use image_repository::MockImageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use software_repository::MockSoftwareRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use topic_repository::MockTopicRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
