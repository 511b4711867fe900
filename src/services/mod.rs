//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, with repository access centralized behind
//! the Unit of Work hub.

mod auth_service;
mod banner_service;
mod catalog_service;
pub mod container;
mod content_service;
mod profile_service;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, CurrentUser, TokenResponse};
pub use banner_service::{BannerBoard, BannerService};
pub use catalog_service::{Catalog, CatalogService, DashboardStats};
pub use content_service::{ContentLibrary, ContentService};
pub use profile_service::{build_copy_text, ProfileManager, ProfileService};
pub use user_service::{UserManager, UserService};
