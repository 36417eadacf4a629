use crate::CliError;
use crate::tests::memory_app;

use sk_auth::{AuthError, SignUpRequest};
use sk_core::CoreError;
use sk_store::{MemoryStorage, PREFERENCE_STORAGE_KEY, SESSION_STORAGE_KEY};

use std::sync::Arc;

use googletest::prelude::*;
use serde_json::json;

#[tokio::test]
async fn given_fresh_storage_when_session_shown_then_signed_out() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    let value = app.session_show().unwrap();

    assert_that!(
        value,
        eq(&json!({ "session": { "identity": null, "is_authenticated": false } }))
    );
}

#[tokio::test]
async fn given_valid_credentials_when_login_then_session_persisted_and_navigates_home() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    let value = app.login("ann@x.com", "pw").await.unwrap();
    app.finish().await;

    assert_that!(value["navigate"], eq(&json!("/")));
    assert_that!(value["session"]["is_authenticated"], eq(&json!(true)));
    assert_that!(value["session"]["identity"]["email"], eq(&json!("ann@x.com")));
    assert_that!(storage.snapshot(SESSION_STORAGE_KEY), some(anything()));
}

#[tokio::test]
async fn given_mismatched_passwords_when_register_then_error_and_nothing_written() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;
    let request = SignUpRequest {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        password: "one".to_string(),
        confirm_password: "two".to_string(),
    };

    let result = app.register(&request).await;
    app.finish().await;

    assert!(matches!(
        result,
        Err(CliError::Auth {
            source: AuthError::PasswordMismatch { .. }
        })
    ));
    assert_that!(storage.snapshot(SESSION_STORAGE_KEY), none());
}

#[tokio::test]
async fn given_signed_in_when_logout_then_key_removed_and_navigates_login() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;
    app.login("ann@x.com", "pw").await.unwrap();
    app.finish().await;

    let value = app.logout().await.unwrap();
    app.finish().await;

    assert_that!(value["navigate"], eq(&json!("/(auth)/login")));
    assert_that!(value["session"]["is_authenticated"], eq(&json!(false)));
    assert_that!(storage.snapshot(SESSION_STORAGE_KEY), none());
}

#[tokio::test]
async fn given_system_preference_when_theme_shown_then_follows_device() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    assert_that!(
        app.theme_show(true),
        eq(&json!({ "theme": "system", "color_scheme": "dark" }))
    );
    assert_that!(
        app.theme_show(false),
        eq(&json!({ "theme": "system", "color_scheme": "light" }))
    );
}

#[tokio::test]
async fn given_unknown_theme_when_set_then_rejected_and_preference_unchanged() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    let result = app.theme_set("sepia", false);
    app.finish().await;

    assert!(matches!(
        result,
        Err(CliError::Core {
            source: CoreError::InvalidPreference { .. }
        })
    ));
    assert_that!(app.theme_show(false)["theme"], eq(&json!("system")));
    assert_that!(storage.snapshot(PREFERENCE_STORAGE_KEY), none());
}

#[tokio::test]
async fn given_theme_set_when_new_app_opens_then_preference_restored() {
    let storage = Arc::new(MemoryStorage::new());
    let first = memory_app(&storage).await;
    first.theme_set("dark", false).unwrap();
    first.finish().await;

    let second = memory_app(&storage).await;

    assert_that!(
        second.theme_show(false),
        eq(&json!({ "theme": "dark", "color_scheme": "dark" }))
    );
}

#[tokio::test]
async fn given_no_session_when_home_requested_then_redirected_to_login() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    let value = app.route("home").unwrap();

    assert_that!(
        value,
        eq(&json!({
            "requested": "/",
            "navigation": { "action": "redirect", "route": "login" },
            "path": "/(auth)/login",
        }))
    );
}

#[tokio::test]
async fn given_session_when_home_requested_then_rendered() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;
    app.login("ann@x.com", "pw").await.unwrap();

    let value = app.route("/").unwrap();

    assert_that!(value["navigation"], eq(&json!({ "action": "render", "route": "home" })));
    assert_that!(value["path"], eq(&json!("/")));
}

#[tokio::test]
async fn given_unknown_route_when_requested_then_error() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    let result = app.route("settings");

    assert!(matches!(
        result,
        Err(CliError::Auth {
            source: AuthError::UnknownRoute { .. }
        })
    ));
}

#[tokio::test]
async fn given_storage_unavailable_when_login_then_command_succeeds_and_failure_counted() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;
    storage.set_available(false);

    let value = app.login("ann@x.com", "pw").await.unwrap();
    app.finish().await;

    assert_that!(value["session"]["is_authenticated"], eq(&json!(true)));
    assert_that!(app.stores().failed_writes(), eq(1));
}

#[tokio::test]
async fn given_email_when_reset_password_then_submitted_and_navigates_login() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    let value = app.reset_password("ann@x.com").await.unwrap();
    app.finish().await;

    assert_that!(
        value,
        eq(&json!({ "submitted": true, "email": "ann@x.com", "navigate": "/(auth)/login" }))
    );
    assert_that!(storage.mutation_count(), eq(0));
}

#[tokio::test]
async fn given_empty_email_when_reset_password_then_missing_field() {
    let storage = Arc::new(MemoryStorage::new());
    let app = memory_app(&storage).await;

    let result = app.reset_password("").await;

    assert!(matches!(
        result,
        Err(CliError::Auth {
            source: AuthError::MissingField { field: "email", .. }
        })
    ));
}
