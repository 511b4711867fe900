//! Homepage carousel banner entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    Active,
    Inactive,
}

impl BannerStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "active" => BannerStatus::Active,
            _ => BannerStatus::Inactive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BannerStatus::Active => "active",
            BannerStatus::Inactive => "inactive",
        }
    }
}

/// Homepage carousel entry. Display order follows `order_index`; the
/// optional start/end dates bound when the banner may be shown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProgramBanner {
    pub id: Uuid,
    pub image_url: String,
    pub link_url: Option<String>,
    pub title: Option<String>,
    pub status: BannerStatus,
    pub order_index: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ProgramBanner {
    /// Whether the banner should be shown at `now`: active status and
    /// inside the validity window (open-ended when a bound is absent).
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        if self.status != BannerStatus::Active {
            return false;
        }
        if let Some(start) = self.start_date {
            if now < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if now > end {
                return false;
            }
        }
        true
    }
}

/// Fields accepted when creating or updating a banner.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BannerDraft {
    pub image_url: String,
    pub link_url: Option<String>,
    pub title: Option<String>,
    pub status: BannerStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn banner(status: BannerStatus) -> ProgramBanner {
        let now = Utc::now();
        ProgramBanner {
            id: Uuid::new_v4(),
            image_url: "https://example.com/banner.png".to_string(),
            link_url: None,
            title: None,
            status,
            order_index: 0,
            start_date: None,
            end_date: None,
            created_at: now,
        }
    }

    #[test]
    fn test_inactive_banner_never_live() {
        let b = banner(BannerStatus::Inactive);
        assert!(!b.is_live(Utc::now()));
    }

    #[test]
    fn test_open_window_is_live() {
        let b = banner(BannerStatus::Active);
        assert!(b.is_live(Utc::now()));
    }

    #[test]
    fn test_window_bounds() {
        let now = Utc::now();
        let mut b = banner(BannerStatus::Active);
        b.start_date = Some(now + Duration::days(1));
        assert!(!b.is_live(now));

        b.start_date = Some(now - Duration::days(2));
        b.end_date = Some(now - Duration::days(1));
        assert!(!b.is_live(now));

        b.end_date = Some(now + Duration::days(1));
        assert!(b.is_live(now));
    }
}
