//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, banner_handler, content_handler, dashboard_handler, image_handler,
    profile_handler, software_handler, topic_handler, user_handler,
};
use crate::domain::{
    AccountStatus, ActivationRequest, ActivationStatus, AppImage, AppRole, BannerStatus, Content,
    ContentStatus, CopyResponse, ProgramBanner, Profile, SessionResponse, SessionUser, Software,
    Topic, TopicStatus, UserAccount,
};
use crate::services::{DashboardStats, TokenResponse};

/// OpenAPI documentation for the Content Hub API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Content Hub API",
        version = "0.1.0",
        description = "Role-gated marketing-content library: topics, reusable copy, \
                       personalized clipboard text, and a homepage banner carousel",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::session,
        // Profile endpoints
        profile_handler::get_profile,
        profile_handler::update_profile,
        // User management endpoints
        user_handler::list_accounts,
        user_handler::set_role,
        user_handler::set_status,
        user_handler::delete_account,
        user_handler::list_activation_requests,
        user_handler::approve_activation,
        user_handler::reject_activation,
        user_handler::request_activation,
        // Topic endpoints
        topic_handler::list_topics,
        topic_handler::topic_detail,
        topic_handler::create_topic,
        topic_handler::update_topic,
        topic_handler::delete_topic,
        // Content endpoints
        content_handler::list_contents,
        content_handler::list_published_contents,
        content_handler::get_content,
        content_handler::copy_content,
        content_handler::my_contents,
        content_handler::create_content,
        content_handler::update_content,
        content_handler::publish_content,
        content_handler::delete_content,
        // Software endpoints
        software_handler::active_software,
        software_handler::list_software,
        software_handler::create_software,
        software_handler::update_software,
        software_handler::delete_software,
        // Image endpoints
        image_handler::list_images,
        image_handler::create_image,
        image_handler::update_image,
        image_handler::delete_image,
        // Banner endpoints
        banner_handler::live_banners,
        banner_handler::list_banners,
        banner_handler::create_banner,
        banner_handler::update_banner,
        banner_handler::delete_banner,
        // Dashboard
        dashboard_handler::dashboard,
    ),
    components(
        schemas(
            // Domain types
            AppRole,
            AccountStatus,
            TopicStatus,
            ContentStatus,
            BannerStatus,
            ActivationStatus,
            Profile,
            UserAccount,
            SessionResponse,
            SessionUser,
            Topic,
            Content,
            CopyResponse,
            Software,
            AppImage,
            ProgramBanner,
            ActivationRequest,
            DashboardStats,
            TokenResponse,
            // Request types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            profile_handler::UpdateProfileRequest,
            user_handler::SetRoleRequest,
            user_handler::SetStatusRequest,
            topic_handler::TopicRequest,
            topic_handler::TopicDetail,
            content_handler::CreateContentRequest,
            content_handler::UpdateContentRequest,
            software_handler::SoftwareRequest,
            image_handler::ImageRequest,
            banner_handler::BannerRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, session resolution"),
        (name = "Profile", description = "Self-service profile settings"),
        (name = "Users", description = "Admin account management and activation requests"),
        (name = "Topics", description = "Content categories"),
        (name = "Content", description = "The content library"),
        (name = "Software", description = "Software tags"),
        (name = "Images", description = "Image library"),
        (name = "Banners", description = "Homepage carousel"),
        (name = "Dashboard", description = "Admin aggregates")
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme to the generated document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
