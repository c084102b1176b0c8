//! Route definitions for the `/notifications` resource.
//!
//! All endpoints require authentication. Static segments (`/unread`,
//! `/read-all`) take priority over the `{user_id}` capture.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST   /                          -> create
/// DELETE /                          -> delete_all
/// GET    /unread                    -> list_unread
/// PATCH  /read-all                  -> mark_all_read
/// PATCH  /{notification_id}/read    -> mark_read
/// GET    /{user_id}                 -> list_for_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(notification::create).delete(notification::delete_all),
        )
        .route("/unread", get(notification::list_unread))
        .route("/read-all", patch(notification::mark_all_read))
        .route("/{notification_id}/read", patch(notification::mark_read))
        .route("/{user_id}", get(notification::list_for_user))
}
