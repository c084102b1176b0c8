//! Route definitions for the `/notification-setting` resource.
//!
//! Both endpoints require authentication and enforce ownership of the
//! path `user_id`.

use axum::routing::get;
use axum::Router;

use crate::handlers::notification_setting;
use crate::state::AppState;

/// Routes mounted at `/notification-setting`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{user_id}",
        get(notification_setting::get_settings).patch(notification_setting::update_settings),
    )
}
