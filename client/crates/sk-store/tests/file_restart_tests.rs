//! Restart scenarios against real files.

use sk_core::{Identity, Preference, SessionState};
use sk_store::{AppStores, FileStorage};

use std::sync::Arc;

use googletest::prelude::*;
use tempfile::TempDir;

async fn open_stores(temp: &TempDir) -> AppStores {
    let storage = FileStorage::open(temp.path()).await.unwrap();
    let stores = AppStores::new(Arc::new(storage));
    stores.hydrate_all().await;
    stores
}

#[tokio::test]
async fn given_signed_in_session_when_process_restarts_then_session_restored_from_disk() {
    // Given: a first process signs in and sets a theme
    let temp = TempDir::new().unwrap();
    let identity = Identity::new("1", "Ann", "ann@x.com");
    {
        let stores = open_stores(&temp).await;
        stores.session().set(identity.clone()).unwrap();
        stores.preferences().set_preference(Preference::Dark);
        stores.flush_all().await;
    }

    // When: a second process opens the same directory
    let stores = open_stores(&temp).await;

    // Then: both records are restored
    assert_that!(stores.session().get(), eq(&SessionState::signed_in(identity)));
    assert_that!(stores.preferences().get_preference(), eq(Preference::Dark));
}

#[tokio::test]
async fn given_sign_out_when_process_restarts_then_session_file_gone_and_signed_out() {
    let temp = TempDir::new().unwrap();
    {
        let stores = open_stores(&temp).await;
        stores
            .session()
            .set(Identity::new("1", "Ann", "ann@x.com"))
            .unwrap();
        stores.session().clear();
        stores.flush_all().await;
    }

    let stores = open_stores(&temp).await;

    assert!(!temp.path().join("auth-storage.json").exists());
    assert_that!(stores.session().get(), eq(&SessionState::signed_out()));
}

#[tokio::test]
async fn given_corrupted_file_when_process_starts_then_defaults_used() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("auth-storage.json"), "{ truncated").unwrap();
    std::fs::write(temp.path().join("theme-storage.json"), "").unwrap();

    let stores = open_stores(&temp).await;

    assert_that!(stores.session().get().is_authenticated(), eq(false));
    assert_that!(stores.preferences().get_preference(), eq(Preference::System));
}

#[tokio::test]
async fn given_record_on_disk_then_human_readable_envelope() {
    let temp = TempDir::new().unwrap();
    let stores = open_stores(&temp).await;

    stores.preferences().set_preference(Preference::Light);
    stores.flush_all().await;

    let raw = std::fs::read_to_string(temp.path().join("theme-storage.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_that!(json["state"]["theme"].as_str(), some(eq("light")));
    assert_that!(json["version"].as_u64(), some(eq(0)));
}

#[tokio::test]
async fn given_rapid_writes_when_flushed_then_last_value_on_disk() {
    let temp = TempDir::new().unwrap();
    let stores = open_stores(&temp).await;

    for preference in [Preference::Dark, Preference::Light, Preference::System] {
        stores.preferences().set_preference(preference);
        stores.flush_all().await;
    }

    let restarted = open_stores(&temp).await;
    assert_that!(restarted.preferences().get_preference(), eq(Preference::System));
}
