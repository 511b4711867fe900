//! Authentication service - session issuance and per-request resolution.
//!
//! Tokens carry identity only (subject + email). Profile status and
//! role are re-fetched from the store on every request, so a role or
//! status change takes effect immediately instead of living on in a
//! stale token.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{AccountStatus, Actor, AppRole, Password, Profile, UserAccount};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Fully resolved acting user: token identity plus fresh profile/role.
///
/// `profile: None` means the fetch failed or the row is missing; both
/// degrade to the most restrictive state, never to elevated access.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub profile: Option<Profile>,
    pub role: Option<AppRole>,
}

impl CurrentUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }

    pub fn status(&self) -> Option<AccountStatus> {
        self.profile.as_ref().map(|p| p.status)
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user; the account starts with a pending profile
    async fn register(
        &self,
        email: String,
        password: String,
        full_name: String,
    ) -> AppResult<UserAccount>;

    /// Login and return a bearer token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Resolve a token into the acting user, fetching profile and role
    async fn authenticate(&self, token: &str) -> AppResult<CurrentUser>;
}

/// Generate a bearer token for a user id/email pair
fn generate_token(id: Uuid, email: &str, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: id,
        email: email.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Concrete implementation of AuthService.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        email: String,
        password: String,
        full_name: String,
    ) -> AppResult<UserAccount> {
        // Email format is validated by the handler's ValidatedJson extractor
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let full_name = Some(full_name).filter(|n| !n.trim().is_empty());

        let user = self
            .uow
            .users()
            .create_account(email, password_hash, full_name.clone())
            .await?;

        Ok(UserAccount {
            id: user.id,
            email: user.email,
            full_name,
            status: AccountStatus::Pending,
            role: None,
            created_at: user.created_at,
        })
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self.uow.users().find_by_email(&email).await?;

        // SECURITY: verify against a dummy hash when the user does not
        // exist, so response timing cannot enumerate valid emails.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => generate_token(user.id, &user.email, &self.config),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    async fn authenticate(&self, token: &str) -> AppResult<CurrentUser> {
        let claims = self.verify_token(token)?;

        let user = self
            .uow
            .users()
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        // Fail closed: a failed profile/role fetch is logged and treated
        // as "no profile / no role", the most restrictive state.
        let profile = match self.uow.users().profile(user.id).await {
            Ok(profile) => profile,
            Err(e) => {
                log_fetch_failure("profile", &e);
                None
            }
        };

        let role = match self.uow.users().role(user.id).await {
            Ok(role) => role,
            Err(e) => {
                log_fetch_failure("role", &e);
                None
            }
        };

        Ok(CurrentUser {
            id: user.id,
            email: user.email,
            profile,
            role,
        })
    }
}

/// Log a profile/role fetch failure; detail only in debug builds.
fn log_fetch_failure(what: &str, err: &AppError) {
    if cfg!(debug_assertions) {
        tracing::error!("Failed to fetch {}: {:?}", what, err);
    } else {
        tracing::error!("Failed to fetch {}", what);
    }
}
