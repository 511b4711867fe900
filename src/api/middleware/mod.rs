//! API middleware.

mod auth;
mod guard;

pub use auth::{identity_middleware, AuthSession};
pub use guard::{
    admin_guard, editor_guard, evaluate, member_guard, pending_guard, sales_guard, GuardConfig,
    GuardDecision,
};
