//! Route guard: declarative per-subtree access control.
//!
//! Each guarded nest declares a [`GuardConfig`]; every request is then
//! evaluated in a fixed order:
//!
//!   auth -> locked -> pending -> role
//!
//! The order is a contract. A locked account must never reach a
//! role-specific page regardless of role, and a pending account is
//! routed to onboarding before a role mismatch is even evaluated (a
//! pending editor sees "activate your account", not "wrong role").
//!
//! Denials are redirects, not errors: sign-in (preserving the
//! originally requested location), access-denied with a reason, or the
//! waiting room.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::config::{ACCESS_DENIED_PATH, SIGN_IN_PATH, WAITING_ROOM_PATH};
use crate::domain::{AccountStatus, AppRole};

use super::auth::AuthSession;

/// Per-subtree guard configuration.
#[derive(Debug, Clone, Copy)]
pub struct GuardConfig {
    /// Roles that may enter; empty means any authenticated role (or none)
    pub required_roles: &'static [AppRole],
    /// Whether an anonymous caller is bounced to sign-in
    pub require_auth: bool,
    /// Whether pending accounts may enter (the waiting room itself)
    pub allow_pending: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            required_roles: &[],
            require_auth: true,
            allow_pending: false,
        }
    }
}

impl GuardConfig {
    pub const fn roles(required_roles: &'static [AppRole]) -> Self {
        Self {
            required_roles,
            require_auth: true,
            allow_pending: false,
        }
    }
}

/// Outcome of evaluating a guard against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    SignIn,
    Locked,
    WaitingRoom,
    RoleDenied,
}

/// The guard's ordering contract, as a pure function.
pub fn evaluate(config: &GuardConfig, session: &AuthSession) -> GuardDecision {
    let user = session.user.as_ref();

    // 1. Authentication
    if config.require_auth && user.is_none() {
        return GuardDecision::SignIn;
    }

    if let Some(user) = user {
        // 2. Locked accounts are stopped before any role evaluation
        if user.status() == Some(AccountStatus::Locked) {
            return GuardDecision::Locked;
        }

        // 3. Pending accounts go to onboarding (admins bypass this)
        if user.status() == Some(AccountStatus::Pending)
            && !config.allow_pending
            && user.role != Some(AppRole::Admin)
        {
            return GuardDecision::WaitingRoom;
        }
    }

    // 4. Role membership
    if !config.required_roles.is_empty() {
        let role = user.and_then(|u| u.role);
        match role {
            Some(role) if config.required_roles.contains(&role) => {}
            _ => return GuardDecision::RoleDenied,
        }
    }

    GuardDecision::Allow
}

impl GuardDecision {
    /// Redirect for a denial; `None` when the request may proceed.
    /// `from` is the originally requested location, preserved across
    /// sign-in for the post-login return.
    pub fn redirect(&self, from: &str) -> Option<Response> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::SignIn => Some(
                Redirect::temporary(&format!(
                    "{}?from={}",
                    SIGN_IN_PATH,
                    urlencoding::encode(from)
                ))
                .into_response(),
            ),
            GuardDecision::Locked => Some(
                Redirect::temporary(&format!("{}?reason=locked", ACCESS_DENIED_PATH))
                    .into_response(),
            ),
            GuardDecision::WaitingRoom => {
                Some(Redirect::temporary(WAITING_ROOM_PATH).into_response())
            }
            GuardDecision::RoleDenied => Some(
                Redirect::temporary(&format!("{}?reason=role", ACCESS_DENIED_PATH))
                    .into_response(),
            ),
        }
    }
}

/// Shared middleware body for all guard flavors.
async fn run_guard(config: GuardConfig, request: Request, next: Next) -> Response {
    let session = request
        .extensions()
        .get::<AuthSession>()
        .cloned()
        .unwrap_or_default();

    let from = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    match evaluate(&config, &session).redirect(&from) {
        Some(denial) => denial,
        None => next.run(request).await,
    }
}

/// Any authenticated account in good standing.
pub async fn member_guard(request: Request, next: Next) -> Response {
    run_guard(GuardConfig::default(), request, next).await
}

/// Authenticated, pending accounts welcome (the waiting room).
pub async fn pending_guard(request: Request, next: Next) -> Response {
    let config = GuardConfig {
        allow_pending: true,
        ..GuardConfig::default()
    };
    run_guard(config, request, next).await
}

/// Admin-only subtree.
pub async fn admin_guard(request: Request, next: Next) -> Response {
    run_guard(GuardConfig::roles(&[AppRole::Admin]), request, next).await
}

/// Editor-only subtree.
pub async fn editor_guard(request: Request, next: Next) -> Response {
    run_guard(GuardConfig::roles(&[AppRole::Editor]), request, next).await
}

/// Sales-only subtree.
pub async fn sales_guard(request: Request, next: Next) -> Response {
    run_guard(GuardConfig::roles(&[AppRole::Sales]), request, next).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Profile;
    use crate::services::CurrentUser;
    use chrono::Utc;
    use uuid::Uuid;

    fn session(status: Option<AccountStatus>, role: Option<AppRole>) -> AuthSession {
        let id = Uuid::new_v4();
        let profile = status.map(|status| Profile {
            id,
            email: "user@example.com".to_string(),
            full_name: None,
            phone_number: None,
            signature_text: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

        AuthSession {
            user: Some(CurrentUser {
                id,
                email: "user@example.com".to_string(),
                profile,
                role,
            }),
        }
    }

    fn anonymous() -> AuthSession {
        AuthSession::default()
    }

    const ADMIN_ONLY: GuardConfig = GuardConfig::roles(&[AppRole::Admin]);
    const EDITOR_ONLY: GuardConfig = GuardConfig::roles(&[AppRole::Editor]);

    #[test]
    fn test_anonymous_is_sent_to_sign_in() {
        let decision = evaluate(&GuardConfig::default(), &anonymous());
        assert_eq!(decision, GuardDecision::SignIn);
    }

    #[test]
    fn test_sign_in_redirect_preserves_location() {
        let response = GuardDecision::SignIn.redirect("/profile").unwrap();
        let location = response.headers().get("location").unwrap().to_str().unwrap();
        assert_eq!(location, "/auth?from=%2Fprofile");
    }

    #[test]
    fn test_locked_admin_denied_before_role_check() {
        // Locked short-circuits even though role=admin satisfies the set
        let s = session(Some(AccountStatus::Locked), Some(AppRole::Admin));
        assert_eq!(evaluate(&ADMIN_ONLY, &s), GuardDecision::Locked);
    }

    #[test]
    fn test_pending_editor_goes_to_waiting_room_not_role_denial() {
        let s = session(Some(AccountStatus::Pending), Some(AppRole::Editor));
        assert_eq!(evaluate(&EDITOR_ONLY, &s), GuardDecision::WaitingRoom);
    }

    #[test]
    fn test_pending_admin_bypasses_waiting_room() {
        let s = session(Some(AccountStatus::Pending), Some(AppRole::Admin));
        assert_eq!(evaluate(&ADMIN_ONLY, &s), GuardDecision::Allow);
    }

    #[test]
    fn test_allow_pending_lets_pending_accounts_through() {
        let config = GuardConfig {
            allow_pending: true,
            ..GuardConfig::default()
        };
        let s = session(Some(AccountStatus::Pending), None);
        assert_eq!(evaluate(&config, &s), GuardDecision::Allow);
    }

    #[test]
    fn test_missing_or_wrong_role_is_denied() {
        let no_role = session(Some(AccountStatus::Active), None);
        assert_eq!(evaluate(&ADMIN_ONLY, &no_role), GuardDecision::RoleDenied);

        let sales = session(Some(AccountStatus::Active), Some(AppRole::Sales));
        assert_eq!(evaluate(&EDITOR_ONLY, &sales), GuardDecision::RoleDenied);
    }

    #[test]
    fn test_active_member_passes_default_guard_without_role() {
        let s = session(Some(AccountStatus::Active), None);
        assert_eq!(evaluate(&GuardConfig::default(), &s), GuardDecision::Allow);
    }

    #[test]
    fn test_missing_profile_is_not_locked_or_pending() {
        // Fail-closed fetch leaves profile: None; such a user passes
        // auth-only routes but never role-gated ones
        let s = session(None, None);
        assert_eq!(evaluate(&GuardConfig::default(), &s), GuardDecision::Allow);
        assert_eq!(evaluate(&ADMIN_ONLY, &s), GuardDecision::RoleDenied);
    }

    #[test]
    fn test_denial_redirect_targets() {
        let locked = GuardDecision::Locked.redirect("/admin").unwrap();
        assert_eq!(
            locked.headers().get("location").unwrap(),
            "/access-denied?reason=locked"
        );

        let role = GuardDecision::RoleDenied.redirect("/admin").unwrap();
        assert_eq!(
            role.headers().get("location").unwrap(),
            "/access-denied?reason=role"
        );

        let pending = GuardDecision::WaitingRoom.redirect("/editor").unwrap();
        assert_eq!(pending.headers().get("location").unwrap(), "/waiting-room");
    }
}
