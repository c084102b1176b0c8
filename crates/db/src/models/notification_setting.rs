//! Notification settings entity model and DTOs.
//!
//! One settings row per user at most, enforced by the
//! `uq_notification_settings_user_id` unique constraint. Nine boolean
//! toggles cover the mobile, email, and slack channels.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waypost_core::types::{DbId, Timestamp};

/// A row from the `notification_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationSetting {
    pub id: DbId,
    pub user_id: DbId,
    pub mobile_notifications: bool,
    pub email_notifications_activity_workspace: bool,
    pub email_notifications_always_send_email: bool,
    pub email_notifications_email_digests: bool,
    pub email_notifications_announcement_and_update_emails: bool,
    pub slack_notifications_activity_workspace: bool,
    pub slack_notifications_always_send_email: bool,
    pub slack_notifications_email_digests: bool,
    pub slack_notifications_announcement_and_update_emails: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial-update DTO for notification settings.
///
/// Keys absent from the request body stay `None` and leave the stored
/// value untouched; this is PATCH semantics, not full replacement.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNotificationSetting {
    pub mobile_notifications: Option<bool>,
    pub email_notifications_activity_workspace: Option<bool>,
    pub email_notifications_always_send_email: Option<bool>,
    pub email_notifications_email_digests: Option<bool>,
    pub email_notifications_announcement_and_update_emails: Option<bool>,
    pub slack_notifications_activity_workspace: Option<bool>,
    pub slack_notifications_always_send_email: Option<bool>,
    pub slack_notifications_email_digests: Option<bool>,
    pub slack_notifications_announcement_and_update_emails: Option<bool>,
}

impl UpdateNotificationSetting {
    /// `true` when the body carried no toggle at all.
    pub fn is_empty(&self) -> bool {
        self.mobile_notifications.is_none()
            && self.email_notifications_activity_workspace.is_none()
            && self.email_notifications_always_send_email.is_none()
            && self.email_notifications_email_digests.is_none()
            && self
                .email_notifications_announcement_and_update_emails
                .is_none()
            && self.slack_notifications_activity_workspace.is_none()
            && self.slack_notifications_always_send_email.is_none()
            && self.slack_notifications_email_digests.is_none()
            && self
                .slack_notifications_announcement_and_update_emails
                .is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_detected() {
        assert!(UpdateNotificationSetting::default().is_empty());
    }

    #[test]
    fn test_single_toggle_is_not_empty() {
        let patch = UpdateNotificationSetting {
            mobile_notifications: Some(false),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
