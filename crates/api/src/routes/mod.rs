//! Route definitions, one module per resource.

pub mod auth;
pub mod health;
pub mod notification;
pub mod notification_setting;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                         register (public)
/// /auth/login                            login (public)
/// /auth/refresh                          refresh (public)
/// /auth/logout                           logout (requires auth)
///
/// /users/me                              get profile, soft-delete account
///
/// /notifications                         create (POST), delete-all (DELETE)
/// /notifications/unread                  caller's unread list
/// /notifications/read-all                mark all read (PATCH)
/// /notifications/{notification_id}/read  flip read-state (PATCH)
/// /notifications/{user_id}               list for user
///
/// /notification-setting/{user_id}        get (GET), partial update (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/notifications", notification::router())
        .nest("/notification-setting", notification_setting::router())
}
