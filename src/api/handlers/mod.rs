//! HTTP request handlers.

pub mod auth_handler;
pub mod banner_handler;
pub mod content_handler;
pub mod dashboard_handler;
pub mod feed_handler;
pub mod image_handler;
pub mod profile_handler;
pub mod software_handler;
pub mod topic_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use banner_handler::{admin_banner_routes, banner_routes};
pub use content_handler::{
    admin_content_routes, content_routes, editor_content_routes, sales_content_routes,
};
pub use dashboard_handler::dashboard_routes;
pub use feed_handler::feed_routes;
pub use image_handler::admin_image_routes;
pub use profile_handler::profile_routes;
pub use software_handler::{admin_software_routes, software_routes};
pub use topic_handler::{admin_topic_routes, topic_routes};
pub use user_handler::{user_routes, waiting_room_routes};
