//! HTTP-level integration tests for the notification settings endpoints.
//!
//! Covers ownership enforcement, auto-creation with defaults on first
//! PATCH, partial-update semantics, and the empty-body rejection.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, patch_json_auth, token_for};
use sqlx::PgPool;
use waypost_db::models::notification_setting::UpdateNotificationSetting;
use waypost_db::models::user::UserRole;
use waypost_db::repositories::notification_setting_repo::UNIQUE_USER_CONSTRAINT;
use waypost_db::repositories::NotificationSettingRepo;

/// Every toggle key the settings object must expose.
const TOGGLE_KEYS: [&str; 9] = [
    "mobile_notifications",
    "email_notifications_activity_workspace",
    "email_notifications_always_send_email",
    "email_notifications_email_digests",
    "email_notifications_announcement_and_update_emails",
    "slack_notifications_activity_workspace",
    "slack_notifications_always_send_email",
    "slack_notifications_email_digests",
    "slack_notifications_announcement_and_update_emails",
];

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_settings_before_first_write_is_404(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "fresh", UserRole::User).await;
    let token = token_for(&user);

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/notification-setting/{}", user.id);
    let response = get_auth(app, &uri, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_settings_of_other_user_is_403(pool: PgPool) {
    let (owner, _) = create_test_user(&pool, "owner", UserRole::User).await;
    let (other, _) = create_test_user(&pool, "other", UserRole::User).await;
    let token = token_for(&other);

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/notification-setting/{}", owner.id);
    let response = get_auth(app, &uri, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["status_code"], 403);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_of_other_user_is_403(pool: PgPool) {
    let (owner, _) = create_test_user(&pool, "owner2", UserRole::User).await;
    let (other, _) = create_test_user(&pool, "other2", UserRole::User).await;
    let token = token_for(&other);

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/notification-setting/{}", owner.id);
    let body = serde_json::json!({ "mobile_notifications": false });
    let response = patch_json_auth(app, &uri, &token, body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_patch_creates_row_with_defaults_merged(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "firstwrite", UserRole::User).await;
    let token = token_for(&user);
    let uri = format!("/api/v1/notification-setting/{}", user.id);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "mobile_notifications": false });
    let response = patch_json_auth(app, &uri, &token, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    // The patched toggle applies; everything else takes its default.
    assert_eq!(data["mobile_notifications"], false);
    assert_eq!(data["email_notifications_activity_workspace"], false);
    assert_eq!(data["email_notifications_email_digests"], true);
    assert_eq!(data["slack_notifications_activity_workspace"], true);
    assert_eq!(
        data["slack_notifications_announcement_and_update_emails"],
        false
    );
    assert_eq!(data["user_id"], user.id);

    // GET now succeeds and exposes every toggle key.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    for key in TOGGLE_KEYS {
        assert!(
            json["data"][key].is_boolean(),
            "settings object must contain toggle {key}"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_leaves_other_toggles_unchanged(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "patcher", UserRole::User).await;
    let token = token_for(&user);
    let uri = format!("/api/v1/notification-setting/{}", user.id);

    // Seed a row with a non-default value.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email_notifications_email_digests": false });
    let response = patch_json_auth(app, &uri, &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Patch a different toggle.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "mobile_notifications": false });
    let response = patch_json_auth(app, &uri, &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Both earlier writes survive; untouched toggles keep defaults.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &uri, &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["mobile_notifications"], false);
    assert_eq!(json["data"]["email_notifications_email_digests"], false);
    assert_eq!(json["data"]["slack_notifications_email_digests"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_patch_body_is_400(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "emptypatch", UserRole::User).await;
    let token = token_for(&user);

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/notification-setting/{}", user.id);
    let response = patch_json_auth(app, &uri, &token, serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_patches_write_a_single_row(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "singleton", UserRole::User).await;
    let token = token_for(&user);
    let uri = format!("/api/v1/notification-setting/{}", user.id);

    for value in [false, true, false] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "mobile_notifications": value });
        let response = patch_json_auth(app, &uri, &token, body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM notification_settings WHERE user_id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1, "at most one settings row may exist per user");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_settings_insert_is_a_unique_violation(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "dupinsert", UserRole::User).await;

    let patch = UpdateNotificationSetting {
        mobile_notifications: Some(false),
        ..Default::default()
    };
    NotificationSettingRepo::create(&pool, user.id, &patch)
        .await
        .expect("first insert should succeed");

    // A second insert for the same user loses to the constraint, and the
    // error classifies so the handler can retry it as an update.
    let err = NotificationSettingRepo::create(&pool, user.id, &patch)
        .await
        .expect_err("second insert must fail");
    assert!(
        waypost_db::is_unique_violation(&err, UNIQUE_USER_CONSTRAINT),
        "second insert must classify as a unique violation on {UNIQUE_USER_CONSTRAINT}"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_first_patches_write_a_single_row(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "racer", UserRole::User).await;
    let token = token_for(&user);
    let uri = format!("/api/v1/notification-setting/{}", user.id);

    // Two first-writes in flight at once: whichever loses the insert race
    // must land as an update instead of surfacing a 409/500.
    let first = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        &token,
        serde_json::json!({ "mobile_notifications": false }),
    );
    let second = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        &token,
        serde_json::json!({ "email_notifications_email_digests": false }),
    );
    let (first, second) = tokio::join!(first, second);
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM notification_settings WHERE user_id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1, "concurrent first writes must produce one row");

    // Each request wrote only its own toggle, so both survive under every
    // interleaving.
    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(json["data"]["mobile_notifications"], false);
    assert_eq!(json["data"]["email_notifications_email_digests"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_require_authentication(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "anon", UserRole::User).await;

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/notification-setting/{}", user.id);
    let response = common::get(app, &uri).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
