use crate::{AuthUser, Identity};

use googletest::prelude::*;

const USER_JSON: &str = r#"{
    "id": "k17abc",
    "name": "Ann",
    "email": "ann@x.com",
    "emailVerified": false,
    "image": null,
    "createdAt": "2025-01-01T00:00:00Z",
    "updatedAt": "2025-01-02T00:00:00Z"
}"#;

#[test]
fn given_backend_user_json_when_deserialized_then_fields_parsed() {
    let user: AuthUser = serde_json::from_str(USER_JSON).unwrap();

    assert_that!(user.id.as_str(), eq("k17abc"));
    assert_that!(user.email_verified, eq(false));
    assert_that!(user.image, none());
    assert!(user.updated_at > user.created_at);
}

#[test]
fn given_user_without_image_field_when_deserialized_then_defaults_to_none() {
    let json = r#"{"id":"1","name":"Ann","email":"a@x.com","emailVerified":true,
        "createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"}"#;

    let user: AuthUser = serde_json::from_str(json).unwrap();

    assert_that!(user.image, none());
}

#[test]
fn given_auth_user_when_converted_then_identity_keeps_id_name_email() {
    let user: AuthUser = serde_json::from_str(USER_JSON).unwrap();

    let identity = Identity::from(user);

    assert_that!(identity, eq(&Identity::new("k17abc", "Ann", "ann@x.com")));
}
