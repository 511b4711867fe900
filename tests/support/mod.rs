//! Shared test harness: an in-memory persistence layer implementing
//! every repository trait, so services and the router can be exercised
//! without a database.

// Each test binary uses a different slice of this harness.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use content_hub::domain::{
    AccountStatus, ActivationRequest, ActivationStatus, AppImage, AppRole, BannerDraft, Content,
    ContentPatch, ImageDraft, ProfileSettings, ProgramBanner, Software, SoftwareDraft, Topic,
    TopicDraft, TopicStatus, User, UserAccount,
};
use content_hub::domain::user::Profile;
use content_hub::errors::{AppError, AppResult};
use content_hub::infra::{
    ActivationRepository, BannerRepository, ContentRepository, ImageRepository, NewContent,
    SoftwareRepository, TopicRepository, UnitOfWork, UserRepository,
};

/// Everything the repositories persist.
#[derive(Default)]
pub struct World {
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub roles: HashMap<Uuid, AppRole>,
    pub requests: Vec<ActivationRequest>,
    pub topics: Vec<Topic>,
    pub software: Vec<Software>,
    /// Newest first, matching the store's ordering contract
    pub contents: Vec<Content>,
    pub images: Vec<AppImage>,
    pub banners: Vec<ProgramBanner>,
}

/// In-memory stand-in for `Persistence`.
#[derive(Clone, Default)]
pub struct InMemory {
    world: Arc<Mutex<World>>,
}

impl InMemory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_world<R>(&self, f: impl FnOnce(&mut World) -> R) -> R {
        f(&mut self.world.lock().unwrap())
    }

    /// Directly seed a topic, bypassing the service layer.
    pub fn seed_topic(&self, status: TopicStatus) -> Topic {
        let topic = Topic {
            id: Uuid::new_v4(),
            name: "Topic".to_string(),
            name_vi: "Chủ đề".to_string(),
            description: String::new(),
            icon: "Star".to_string(),
            color: "primary".to_string(),
            status,
            content_count: 0,
            created_at: Utc::now(),
        };
        self.with_world(|w| w.topics.push(topic.clone()));
        topic
    }
}

impl UnitOfWork for InMemory {
    fn users(&self) -> Arc<dyn UserRepository> {
        Arc::new(self.clone())
    }

    fn activations(&self) -> Arc<dyn ActivationRepository> {
        Arc::new(self.clone())
    }

    fn topics(&self) -> Arc<dyn TopicRepository> {
        Arc::new(self.clone())
    }

    fn software(&self) -> Arc<dyn SoftwareRepository> {
        Arc::new(self.clone())
    }

    fn contents(&self) -> Arc<dyn ContentRepository> {
        Arc::new(self.clone())
    }

    fn images(&self) -> Arc<dyn ImageRepository> {
        Arc::new(self.clone())
    }

    fn banners(&self) -> Arc<dyn BannerRepository> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl UserRepository for InMemory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.with_world(|w| w.users.iter().find(|u| u.email == email).cloned()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.with_world(|w| w.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn create_account(
        &self,
        email: String,
        password_hash: String,
        full_name: Option<String>,
    ) -> AppResult<User> {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let user = User {
            id,
            email: email.clone(),
            password_hash,
            created_at: now,
            updated_at: now,
        };
        let profile = Profile {
            id,
            email,
            full_name,
            phone_number: None,
            signature_text: None,
            status: AccountStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.with_world(|w| {
            w.users.push(user.clone());
            w.profiles.push(profile);
        });

        Ok(user)
    }

    async fn profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.with_world(|w| w.profiles.iter().find(|p| p.id == user_id).cloned()))
    }

    async fn role(&self, user_id: Uuid) -> AppResult<Option<AppRole>> {
        Ok(self.with_world(|w| w.roles.get(&user_id).copied()))
    }

    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
        Ok(self.with_world(|w| {
            let mut accounts: Vec<UserAccount> = w
                .profiles
                .iter()
                .map(|p| UserAccount {
                    id: p.id,
                    email: p.email.clone(),
                    full_name: p.full_name.clone(),
                    status: p.status,
                    role: w.roles.get(&p.id).copied(),
                    created_at: p.created_at,
                })
                .collect();
            accounts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            accounts
        }))
    }

    async fn update_profile_settings(
        &self,
        user_id: Uuid,
        settings: ProfileSettings,
    ) -> AppResult<Profile> {
        self.with_world(|w| {
            let profile = w
                .profiles
                .iter_mut()
                .find(|p| p.id == user_id)
                .ok_or(AppError::NotFound)?;

            if let Some(full_name) = settings.full_name {
                profile.full_name = Some(full_name);
            }
            if let Some(phone_number) = settings.phone_number {
                profile.phone_number = Some(phone_number);
            }
            if let Some(signature_text) = settings.signature_text {
                profile.signature_text = Some(signature_text);
            }
            profile.updated_at = Utc::now();
            Ok(profile.clone())
        })
    }

    async fn set_status(&self, user_id: Uuid, status: AccountStatus) -> AppResult<Profile> {
        self.with_world(|w| {
            let profile = w
                .profiles
                .iter_mut()
                .find(|p| p.id == user_id)
                .ok_or(AppError::NotFound)?;
            profile.status = status;
            profile.updated_at = Utc::now();
            Ok(profile.clone())
        })
    }

    async fn set_role(&self, user_id: Uuid, role: Option<AppRole>) -> AppResult<()> {
        self.with_world(|w| match role {
            Some(role) => {
                w.roles.insert(user_id, role);
            }
            None => {
                w.roles.remove(&user_id);
            }
        });
        Ok(())
    }

    async fn delete_account(&self, user_id: Uuid) -> AppResult<()> {
        self.with_world(|w| {
            if !w.users.iter().any(|u| u.id == user_id) {
                return Err(AppError::NotFound);
            }
            w.requests.retain(|r| r.user_id != user_id);
            w.roles.remove(&user_id);
            w.profiles.retain(|p| p.id != user_id);
            w.users.retain(|u| u.id != user_id);
            Ok(())
        })
    }
}

#[async_trait]
impl ActivationRepository for InMemory {
    async fn create(&self, user_id: Uuid, user_email: String) -> AppResult<ActivationRequest> {
        self.with_world(|w| {
            // The store's partial unique index, reproduced in memory
            if w.requests
                .iter()
                .any(|r| r.user_id == user_id && r.status == ActivationStatus::Sent)
            {
                return Err(AppError::conflict("Activation request"));
            }

            let request = ActivationRequest {
                id: Uuid::new_v4(),
                user_id,
                user_email,
                status: ActivationStatus::Sent,
                created_at: Utc::now(),
                processed_at: None,
                processed_by: None,
            };
            w.requests.push(request.clone());
            Ok(request)
        })
    }

    async fn list_sent(&self) -> AppResult<Vec<ActivationRequest>> {
        Ok(self.with_world(|w| {
            w.requests
                .iter()
                .filter(|r| r.status == ActivationStatus::Sent)
                .cloned()
                .collect()
        }))
    }

    async fn approve(&self, user_id: Uuid, processed_by: Uuid) -> AppResult<()> {
        self.with_world(|w| {
            let profile = w
                .profiles
                .iter_mut()
                .find(|p| p.id == user_id)
                .ok_or(AppError::NotFound)?;
            profile.status = AccountStatus::Active;
            profile.updated_at = Utc::now();

            for request in w
                .requests
                .iter_mut()
                .filter(|r| r.user_id == user_id && r.status == ActivationStatus::Sent)
            {
                request.status = ActivationStatus::Approved;
                request.processed_at = Some(Utc::now());
                request.processed_by = Some(processed_by);
            }
            Ok(())
        })
    }

    async fn mark_processed(
        &self,
        user_id: Uuid,
        status: ActivationStatus,
        processed_by: Uuid,
    ) -> AppResult<()> {
        self.with_world(|w| {
            for request in w
                .requests
                .iter_mut()
                .filter(|r| r.user_id == user_id && r.status == ActivationStatus::Sent)
            {
                request.status = status;
                request.processed_at = Some(Utc::now());
                request.processed_by = Some(processed_by);
            }
        });
        Ok(())
    }
}

#[async_trait]
impl TopicRepository for InMemory {
    async fn list(&self) -> AppResult<Vec<Topic>> {
        Ok(self.with_world(|w| w.topics.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Topic>> {
        Ok(self.with_world(|w| w.topics.iter().find(|t| t.id == id).cloned()))
    }

    async fn insert(&self, draft: TopicDraft) -> AppResult<Topic> {
        let topic = Topic {
            id: Uuid::new_v4(),
            name: draft.name,
            name_vi: draft.name_vi,
            description: draft.description,
            icon: draft.icon,
            color: draft.color,
            status: draft.status,
            content_count: 0,
            created_at: Utc::now(),
        };
        self.with_world(|w| w.topics.push(topic.clone()));
        Ok(topic)
    }

    async fn update(&self, id: Uuid, draft: TopicDraft) -> AppResult<Topic> {
        self.with_world(|w| {
            let topic = w
                .topics
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(AppError::NotFound)?;
            topic.name = draft.name;
            topic.name_vi = draft.name_vi;
            topic.description = draft.description;
            topic.icon = draft.icon;
            topic.color = draft.color;
            topic.status = draft.status;
            Ok(topic.clone())
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.with_world(|w| {
            let before = w.topics.len();
            w.topics.retain(|t| t.id != id);
            if w.topics.len() == before {
                Err(AppError::NotFound)
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl SoftwareRepository for InMemory {
    async fn list(&self) -> AppResult<Vec<Software>> {
        Ok(self.with_world(|w| w.software.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Software>> {
        Ok(self.with_world(|w| w.software.iter().find(|s| s.id == id).cloned()))
    }

    async fn insert(&self, draft: SoftwareDraft) -> AppResult<Software> {
        let software = Software {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            tag: draft.tag,
            status: draft.status,
            created_at: Utc::now(),
        };
        self.with_world(|w| w.software.push(software.clone()));
        Ok(software)
    }

    async fn update(&self, id: Uuid, draft: SoftwareDraft) -> AppResult<Software> {
        self.with_world(|w| {
            let software = w
                .software
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(AppError::NotFound)?;
            software.name = draft.name;
            software.description = draft.description;
            software.tag = draft.tag;
            software.status = draft.status;
            Ok(software.clone())
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.with_world(|w| {
            let before = w.software.len();
            w.software.retain(|s| s.id != id);
            if w.software.len() == before {
                Err(AppError::NotFound)
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl ContentRepository for InMemory {
    async fn list(&self) -> AppResult<Vec<Content>> {
        Ok(self.with_world(|w| w.contents.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Content>> {
        Ok(self.with_world(|w| w.contents.iter().find(|c| c.id == id).cloned()))
    }

    async fn insert(&self, new: NewContent) -> AppResult<Content> {
        let now = Utc::now();
        let content = Content {
            id: Uuid::new_v4(),
            title: new.title,
            body: new.body,
            topic_id: new.topic_id,
            software_id: new.software_id,
            platforms: new.platforms,
            purpose: new.purpose,
            status: new.status,
            image_url: new.image_url,
            copy_count: 0,
            owner_id: new.owner_id,
            created_at: now,
            updated_at: now,
        };
        self.with_world(|w| w.contents.insert(0, content.clone()));
        Ok(content)
    }

    async fn update(&self, id: Uuid, patch: ContentPatch) -> AppResult<Content> {
        self.with_world(|w| {
            let content = w
                .contents
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(AppError::NotFound)?;

            if let Some(title) = patch.title {
                content.title = title;
            }
            if let Some(body) = patch.body {
                content.body = body;
            }
            if let Some(topic_id) = patch.topic_id {
                content.topic_id = topic_id;
            }
            if let Some(software_id) = patch.software_id {
                content.software_id = software_id;
            }
            if let Some(platforms) = patch.platforms {
                content.platforms = platforms;
            }
            if let Some(purpose) = patch.purpose {
                content.purpose = purpose;
            }
            if let Some(status) = patch.status {
                content.status = status;
            }
            if let Some(image_url) = patch.image_url {
                content.image_url = image_url;
            }
            content.updated_at = Utc::now();
            Ok(content.clone())
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.with_world(|w| {
            let before = w.contents.len();
            w.contents.retain(|c| c.id != id);
            if w.contents.len() == before {
                Err(AppError::NotFound)
            } else {
                Ok(())
            }
        })
    }

    async fn increment_copy_count(&self, id: Uuid) -> AppResult<Content> {
        self.with_world(|w| {
            let content = w
                .contents
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(AppError::NotFound)?;
            content.copy_count += 1;
            Ok(content.clone())
        })
    }
}

#[async_trait]
impl ImageRepository for InMemory {
    async fn list(&self) -> AppResult<Vec<AppImage>> {
        Ok(self.with_world(|w| w.images.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AppImage>> {
        Ok(self.with_world(|w| w.images.iter().find(|i| i.id == id).cloned()))
    }

    async fn insert(&self, draft: ImageDraft) -> AppResult<AppImage> {
        let image = AppImage {
            id: Uuid::new_v4(),
            url: draft.url,
            content_id: draft.content_id,
            content_title: draft.content_title,
            description: draft.description,
            uploaded_at: Utc::now(),
        };
        self.with_world(|w| w.images.push(image.clone()));
        Ok(image)
    }

    async fn update(&self, id: Uuid, draft: ImageDraft) -> AppResult<AppImage> {
        self.with_world(|w| {
            let image = w
                .images
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or(AppError::NotFound)?;
            image.url = draft.url;
            image.content_id = draft.content_id;
            image.content_title = draft.content_title;
            image.description = draft.description;
            Ok(image.clone())
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.with_world(|w| {
            let before = w.images.len();
            w.images.retain(|i| i.id != id);
            if w.images.len() == before {
                Err(AppError::NotFound)
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl BannerRepository for InMemory {
    async fn list(&self) -> AppResult<Vec<ProgramBanner>> {
        Ok(self.with_world(|w| {
            let mut banners = w.banners.clone();
            banners.sort_by_key(|b| b.order_index);
            banners
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProgramBanner>> {
        Ok(self.with_world(|w| w.banners.iter().find(|b| b.id == id).cloned()))
    }

    async fn insert(&self, draft: BannerDraft, order_index: i32) -> AppResult<ProgramBanner> {
        let banner = ProgramBanner {
            id: Uuid::new_v4(),
            image_url: draft.image_url,
            link_url: draft.link_url,
            title: draft.title,
            status: draft.status,
            order_index,
            start_date: draft.start_date,
            end_date: draft.end_date,
            created_at: Utc::now(),
        };
        self.with_world(|w| w.banners.push(banner.clone()));
        Ok(banner)
    }

    async fn update(&self, id: Uuid, draft: BannerDraft) -> AppResult<ProgramBanner> {
        self.with_world(|w| {
            let banner = w
                .banners
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(AppError::NotFound)?;
            banner.image_url = draft.image_url;
            banner.link_url = draft.link_url;
            banner.title = draft.title;
            banner.status = draft.status;
            banner.start_date = draft.start_date;
            banner.end_date = draft.end_date;
            Ok(banner.clone())
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.with_world(|w| {
            let before = w.banners.len();
            w.banners.retain(|b| b.id != id);
            if w.banners.len() == before {
                Err(AppError::NotFound)
            } else {
                Ok(())
            }
        })
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.with_world(|w| w.banners.len() as u64))
    }
}
