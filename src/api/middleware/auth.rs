//! Identity resolution middleware.
//!
//! Runs before every guard and handler, turning an optional bearer
//! token into a fully resolved [`AuthSession`]. The sequencing is
//! deliberate and explicit: token -> user -> profile -> role, so no
//! downstream code ever observes a half-resolved session.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::Actor;
use crate::services::CurrentUser;

/// The resolved session attached to every request.
///
/// `user: None` covers both "no token" and "invalid/expired token";
/// either way the request proceeds as anonymous and the guards decide
/// what that means for the route.
#[derive(Clone, Debug, Default)]
pub struct AuthSession {
    pub user: Option<CurrentUser>,
}

impl AuthSession {
    pub fn actor(&self) -> Actor {
        match &self.user {
            Some(user) => user.actor(),
            None => Actor::anonymous(),
        }
    }
}

/// Resolve the caller's identity and stash it in request extensions.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX));

    let session = match token {
        Some(token) => match state.auth_service.authenticate(token).await {
            Ok(user) => AuthSession { user: Some(user) },
            Err(e) => {
                // An unusable token degrades to anonymous; guarded
                // routes will bounce the caller to sign-in.
                tracing::debug!("Token did not resolve to a session: {}", e);
                AuthSession::default()
            }
        },
        None => AuthSession::default(),
    };

    request.extensions_mut().insert(session);
    next.run(request).await
}
