//! HTTP handlers, grouped by resource.
//!
//! Handlers are stateless async functions: dependencies arrive through
//! `State<AppState>` and the caller's identity through the [`AuthUser`]
//! extractor, never through hidden module-level singletons.
//!
//! [`AuthUser`]: crate::middleware::auth::AuthUser

pub mod auth;
pub mod notification;
pub mod notification_setting;
pub mod users;
