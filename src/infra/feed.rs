//! Content change feed.
//!
//! A push-based stream of insert/update/delete events keyed by record
//! id, published after every successful content mutation and consumed
//! over WebSocket. Every event carries a monotonically increasing
//! sequence number, the logical clock that lets a consumer decide
//! whether an event supersedes what it has already applied.
//!
//! [`ContentProjection`] is the reducer consumers mirror: an event is
//! applied only if its sequence is newer than the last one applied for
//! that id, so a slow event can never overwrite a newer state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::FEED_CHANNEL_CAPACITY;
use crate::domain::Content;

/// One content change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentChange {
    Insert { content: Content },
    Update { content: Content },
    Delete { id: Uuid },
}

impl ContentChange {
    /// The id of the affected record.
    pub fn record_id(&self) -> Uuid {
        match self {
            ContentChange::Insert { content } | ContentChange::Update { content } => content.id,
            ContentChange::Delete { id } => *id,
        }
    }
}

/// A change stamped with its position in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEvent {
    pub seq: u64,
    #[serde(flatten)]
    pub change: ContentChange,
}

/// Broadcast hub for content changes.
pub struct ContentFeed {
    tx: broadcast::Sender<FeedEvent>,
    seq: AtomicU64,
}

impl Default for ContentFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(FEED_CHANNEL_CAPACITY);
        Self {
            tx,
            seq: AtomicU64::new(0),
        }
    }

    /// Subscribe to the feed. Slow subscribers may observe lag errors
    /// and should resynchronize with a full fetch.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.tx.subscribe()
    }

    /// Stamp and publish a change. Returns the assigned sequence.
    pub fn publish(&self, change: ContentChange) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let event = FeedEvent { seq, change };
        // No receivers is fine; events are only a refresh hint
        let _ = self.tx.send(event);
        seq
    }

    pub fn inserted(&self, content: Content) -> u64 {
        self.publish(ContentChange::Insert { content })
    }

    pub fn updated(&self, content: Content) -> u64 {
        self.publish(ContentChange::Update { content })
    }

    pub fn deleted(&self, id: Uuid) -> u64 {
        self.publish(ContentChange::Delete { id })
    }
}

/// Event-sourced view of the content collection, newest first.
///
/// Applies feed events idempotently: an event whose sequence does not
/// supersede the last one applied for the same record is dropped.
#[derive(Debug, Default)]
pub struct ContentProjection {
    rows: Vec<Content>,
    applied: HashMap<Uuid, u64>,
}

impl ContentProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize from a full fetch (already ordered newest first).
    pub fn from_rows(rows: Vec<Content>) -> Self {
        Self {
            rows,
            applied: HashMap::new(),
        }
    }

    pub fn rows(&self) -> &[Content] {
        &self.rows
    }

    /// Apply one feed event. Returns false when the event was stale
    /// and ignored.
    pub fn apply(&mut self, event: FeedEvent) -> bool {
        let id = event.change.record_id();
        if let Some(&last) = self.applied.get(&id) {
            if event.seq <= last {
                return false;
            }
        }
        self.applied.insert(id, event.seq);

        match event.change {
            ContentChange::Insert { content } => {
                self.rows.retain(|c| c.id != content.id);
                self.rows.insert(0, content);
            }
            ContentChange::Update { content } => {
                if let Some(slot) = self.rows.iter_mut().find(|c| c.id == content.id) {
                    *slot = content;
                } else {
                    self.rows.insert(0, content);
                }
            }
            ContentChange::Delete { id } => {
                self.rows.retain(|c| c.id != id);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentStatus;
    use chrono::Utc;

    fn content(title: &str) -> Content {
        let now = Utc::now();
        Content {
            id: Uuid::new_v4(),
            title: title.to_string(),
            body: String::new(),
            topic_id: None,
            software_id: None,
            platforms: vec![],
            purpose: String::new(),
            status: ContentStatus::Published,
            image_url: None,
            copy_count: 0,
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let feed = ContentFeed::new();
        let a = feed.inserted(content("a"));
        let b = feed.updated(content("b"));
        let c = feed.deleted(Uuid::new_v4());
        assert!(a < b && b < c);
    }

    #[test]
    fn test_subscriber_receives_events() {
        let feed = ContentFeed::new();
        let mut rx = feed.subscribe();

        let c = content("hello");
        feed.inserted(c.clone());

        let event = rx.try_recv().unwrap();
        assert_eq!(event.seq, 1);
        assert_eq!(event.change.record_id(), c.id);
    }

    #[test]
    fn test_projection_prepends_inserts() {
        let mut projection = ContentProjection::new();
        let first = content("first");
        let second = content("second");

        projection.apply(FeedEvent {
            seq: 1,
            change: ContentChange::Insert {
                content: first.clone(),
            },
        });
        projection.apply(FeedEvent {
            seq: 2,
            change: ContentChange::Insert {
                content: second.clone(),
            },
        });

        let ids: Vec<Uuid> = projection.rows().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_stale_event_does_not_overwrite() {
        let mut projection = ContentProjection::new();
        let mut row = content("v1");
        let id = row.id;

        projection.apply(FeedEvent {
            seq: 5,
            change: ContentChange::Insert {
                content: row.clone(),
            },
        });

        // A late event with a lower sequence must be ignored
        row.title = "stale".to_string();
        let applied = projection.apply(FeedEvent {
            seq: 3,
            change: ContentChange::Update { content: row },
        });

        assert!(!applied);
        assert_eq!(projection.rows()[0].id, id);
        assert_eq!(projection.rows()[0].title, "v1");
    }

    #[test]
    fn test_update_for_unknown_row_prepends() {
        let mut projection = ContentProjection::from_rows(vec![content("seeded")]);
        let fresh = content("fresh");

        projection.apply(FeedEvent {
            seq: 1,
            change: ContentChange::Update {
                content: fresh.clone(),
            },
        });

        assert_eq!(projection.rows().len(), 2);
        assert_eq!(projection.rows()[0].id, fresh.id);
    }

    #[test]
    fn test_delete_removes_row() {
        let row = content("to-delete");
        let id = row.id;
        let mut projection = ContentProjection::from_rows(vec![row]);

        projection.apply(FeedEvent {
            seq: 1,
            change: ContentChange::Delete { id },
        });

        assert!(projection.rows().is_empty());
    }
}
