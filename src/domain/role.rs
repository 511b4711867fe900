//! Role and account status enumerations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{
    ROLE_ADMIN, ROLE_EDITOR, ROLE_SALES, STATUS_ACTIVE, STATUS_LOCKED, STATUS_PENDING,
};

/// Application roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    Editor,
    Sales,
}

impl AppRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, AppRole::Admin)
    }

    /// Parse a stored role value. Unknown values map to None rather than
    /// being promoted to any default role.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ROLE_ADMIN => Some(AppRole::Admin),
            ROLE_EDITOR => Some(AppRole::Editor),
            ROLE_SALES => Some(AppRole::Sales),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => ROLE_ADMIN,
            AppRole::Editor => ROLE_EDITOR,
            AppRole::Sales => ROLE_SALES,
        }
    }
}

impl std::fmt::Display for AppRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account lifecycle status, independent of role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Active,
    Locked,
}

impl AccountStatus {
    /// Parse a stored status value. Unknown values degrade to the most
    /// restrictive non-terminal state.
    pub fn parse(s: &str) -> Self {
        match s {
            STATUS_ACTIVE => AccountStatus::Active,
            STATUS_LOCKED => AccountStatus::Locked,
            _ => AccountStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => STATUS_PENDING,
            AccountStatus::Active => STATUS_ACTIVE,
            AccountStatus::Locked => STATUS_LOCKED,
        }
    }

    /// Allowed transitions: pending -> active, active <-> locked.
    pub fn can_transition_to(&self, next: AccountStatus) -> bool {
        matches!(
            (self, next),
            (AccountStatus::Pending, AccountStatus::Active)
                | (AccountStatus::Active, AccountStatus::Locked)
                | (AccountStatus::Locked, AccountStatus::Active)
        )
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_round_trip() {
        assert_eq!(AppRole::parse("admin"), Some(AppRole::Admin));
        assert_eq!(AppRole::parse("editor"), Some(AppRole::Editor));
        assert_eq!(AppRole::parse("sales"), Some(AppRole::Sales));
        assert_eq!(AppRole::parse("superuser"), None);
    }

    #[test]
    fn test_status_transitions() {
        assert!(AccountStatus::Pending.can_transition_to(AccountStatus::Active));
        assert!(AccountStatus::Active.can_transition_to(AccountStatus::Locked));
        assert!(AccountStatus::Locked.can_transition_to(AccountStatus::Active));

        assert!(!AccountStatus::Pending.can_transition_to(AccountStatus::Locked));
        assert!(!AccountStatus::Active.can_transition_to(AccountStatus::Pending));
        assert!(!AccountStatus::Locked.can_transition_to(AccountStatus::Pending));
    }

    #[test]
    fn test_unknown_status_degrades_to_pending() {
        assert_eq!(AccountStatus::parse("unknown"), AccountStatus::Pending);
    }
}
