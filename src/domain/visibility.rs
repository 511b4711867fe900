//! Visibility resolver for topics and content.
//!
//! Projects the full topic/content collections down to what the current
//! actor may see, given role and entity status:
//!
//! - Admin: sees all topics and all contents.
//! - Everyone else (editor, sales, role-less, anonymous): only active
//!   topics, and only published contents whose topic is visible.
//!
//! Content whose `topic_id` points at a topic that no longer exists
//! stays visible. Orphaned content is not hidden by a missing topic;
//! that behavior is intentional and relied upon elsewhere.

use std::collections::HashSet;

use uuid::Uuid;

use super::content::{Content, ContentStatus};
use super::role::AppRole;
use super::topic::{Topic, TopicStatus};

/// Read-only projection of the library for one actor.
pub struct Visibility<'a> {
    role: Option<AppRole>,
    topics: &'a [Topic],
    contents: &'a [Content],
}

impl<'a> Visibility<'a> {
    pub fn new(role: Option<AppRole>, topics: &'a [Topic], contents: &'a [Content]) -> Self {
        Self {
            role,
            topics,
            contents,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(AppRole::Admin)
    }

    /// All topics for admin, active topics otherwise. Backing-collection
    /// order is preserved; no resort.
    pub fn visible_topics(&self) -> Vec<&'a Topic> {
        self.topics
            .iter()
            .filter(|t| self.is_admin() || t.status == TopicStatus::Active)
            .collect()
    }

    /// A missing topic counts as visible so content without a (live)
    /// topic is never hidden by the reference.
    pub fn is_topic_visible(&self, topic_id: &Uuid) -> bool {
        let Some(topic) = self.topics.iter().find(|t| t.id == *topic_id) else {
            return true;
        };
        self.is_admin() || topic.status == TopicStatus::Active
    }

    pub fn is_content_visible(&self, content_id: &Uuid) -> bool {
        let Some(content) = self.contents.iter().find(|c| c.id == *content_id) else {
            return false;
        };
        if let Some(topic_id) = content.topic_id {
            if !self.is_topic_visible(&topic_id) {
                return false;
            }
        }
        self.is_admin() || content.status == ContentStatus::Published
    }

    /// Admin: the full set regardless of status. Non-admin: published
    /// content whose topic (if any) is visible.
    pub fn visible_contents(&self) -> Vec<&'a Content> {
        if self.is_admin() {
            return self.contents.iter().collect();
        }

        let visible_topic_ids = self.visible_topic_ids();
        self.contents
            .iter()
            .filter(|c| c.status == ContentStatus::Published)
            .filter(|c| match c.topic_id {
                Some(topic_id) => visible_topic_ids.contains(&topic_id),
                None => true,
            })
            .collect()
    }

    /// Always filtered to published, even for admin. Public surfaces
    /// (home feed, libraries) never show drafts to anyone.
    pub fn visible_published_contents(&self) -> Vec<&'a Content> {
        let published = self
            .contents
            .iter()
            .filter(|c| c.status == ContentStatus::Published);

        if self.is_admin() {
            return published.collect();
        }

        let visible_topic_ids = self.visible_topic_ids();
        published
            .filter(|c| match c.topic_id {
                Some(topic_id) => visible_topic_ids.contains(&topic_id),
                None => true,
            })
            .collect()
    }

    /// Empty when the topic itself is not visible; the topic gate
    /// short-circuits before any per-content filtering.
    pub fn visible_contents_by_topic(&self, topic_id: &Uuid) -> Vec<&'a Content> {
        if !self.is_topic_visible(topic_id) {
            return Vec::new();
        }

        self.contents
            .iter()
            .filter(|c| c.topic_id == Some(*topic_id))
            .filter(|c| self.is_admin() || c.status == ContentStatus::Published)
            .collect()
    }

    fn visible_topic_ids(&self) -> HashSet<Uuid> {
        self.visible_topics().iter().map(|t| t.id).collect()
    }
}
