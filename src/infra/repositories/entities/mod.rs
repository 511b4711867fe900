//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod activation_request;
pub mod app_image;
pub mod content;
pub mod profile;
pub mod program_banner;
pub mod software;
pub mod topic;
pub mod user;
pub mod user_role;
