//! Profile service - self-service settings and copy personalization.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Profile, ProfileSettings};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Self-service profile operations.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the caller's own profile
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Profile>;

    /// Update the caller's own settings (name, hotline, signature)
    async fn update_settings(
        &self,
        user_id: Uuid,
        settings: ProfileSettings,
    ) -> AppResult<Profile>;
}

/// Append the user's hotline and signature to a content body.
///
/// The exact phrasing is part of the product: sales staff paste this
/// straight into customer conversations.
pub fn build_copy_text(body: &str, settings: &ProfileSettings) -> String {
    let mut result = body.to_string();

    if let Some(phone) = settings.phone_number.as_deref().filter(|p| !p.is_empty()) {
        result.push_str(&format!("\n\nLiên hệ ngay hotline: {}", phone));
    }

    if let Some(signature) = settings
        .signature_text
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        result.push_str(&format!("\n\n{}", signature));
    }

    result
}

/// Concrete implementation of ProfileService.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    /// Create new profile service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Profile> {
        self.uow.users().profile(user_id).await?.ok_or_not_found()
    }

    async fn update_settings(
        &self,
        user_id: Uuid,
        settings: ProfileSettings,
    ) -> AppResult<Profile> {
        self.uow
            .users()
            .update_profile_settings(user_id, settings)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(phone: Option<&str>, signature: Option<&str>) -> ProfileSettings {
        ProfileSettings {
            full_name: None,
            phone_number: phone.map(String::from),
            signature_text: signature.map(String::from),
        }
    }

    #[test]
    fn test_copy_text_plain_when_no_settings() {
        let text = build_copy_text("body", &settings(None, None));
        assert_eq!(text, "body");
    }

    #[test]
    fn test_copy_text_appends_hotline_and_signature() {
        let text = build_copy_text("body", &settings(Some("0123 456 789"), Some("Anh Minh")));
        assert_eq!(
            text,
            "body\n\nLiên hệ ngay hotline: 0123 456 789\n\nAnh Minh"
        );
    }

    #[test]
    fn test_copy_text_skips_empty_fields() {
        let text = build_copy_text("body", &settings(Some(""), Some("sig")));
        assert_eq!(text, "body\n\nsig");
    }
}
