//! Content Hub - role-gated marketing-content library API
//!
//! Administrators, editors, and sales staff create, publish, and browse
//! reusable marketing copy organized by topics, with per-user
//! personalization on copy and a homepage banner carousel.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, the permission policy, and the
//!   visibility resolver
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories, change feed)
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Seed the stock catalog and a bootstrap admin
//! cargo run -- seed --admin-email admin@example.com --admin-password ...
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Actor, AppRole, Password, Visibility};
pub use errors::{AppError, AppResult};
