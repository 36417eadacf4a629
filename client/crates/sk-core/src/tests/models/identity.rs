use crate::{CoreError, Identity};

use googletest::prelude::*;

#[test]
fn given_identity_with_id_when_validated_then_ok() {
    let identity = Identity::new("1", "Ann", "ann@x.com");

    assert_that!(identity.validate(), ok(anything()));
}

#[test]
fn given_empty_id_when_validated_then_validation_error() {
    let identity = Identity::new("", "Ann", "ann@x.com");

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_whitespace_id_when_validated_then_validation_error() {
    let identity = Identity::new("   ", "Ann", "ann@x.com");

    assert!(identity.validate().is_err());
}

#[test]
fn given_empty_name_and_email_when_validated_then_ok() {
    // Only the id is checked
    let identity = Identity::new("42", "", "");

    assert_that!(identity.validate(), ok(anything()));
}

#[test]
fn given_identity_json_when_deserialized_then_fields_match() {
    let json = r#"{"id":"abc","name":"Ann","email":"ann@x.com"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity, eq(&Identity::new("abc", "Ann", "ann@x.com")));
}
