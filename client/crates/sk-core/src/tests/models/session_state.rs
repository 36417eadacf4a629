use crate::{Identity, SessionState};

use googletest::prelude::*;

#[test]
fn given_default_state_then_signed_out() {
    let state = SessionState::default();

    assert_that!(state.identity(), none());
    assert_that!(state.is_authenticated(), eq(false));
    assert_that!(state, eq(&SessionState::signed_out()));
}

#[test]
fn given_identity_when_signed_in_then_authenticated() {
    let identity = Identity::new("1", "Ann", "ann@x.com");

    let state = SessionState::signed_in(identity.clone());

    assert_that!(state.is_authenticated(), eq(true));
    assert_that!(state.identity(), some(eq(&identity)));
    assert_that!(state.into_identity(), some(eq(&identity)));
}

#[test]
fn given_signed_in_state_when_serialized_then_includes_flag_and_identity() {
    let state = SessionState::signed_in(Identity::new("1", "Ann", "ann@x.com"));

    let json = serde_json::to_value(&state).unwrap();

    assert_that!(json["is_authenticated"].as_bool(), some(eq(true)));
    assert_that!(json["identity"]["name"].as_str(), some(eq("Ann")));
}

#[test]
fn given_signed_out_state_when_serialized_then_identity_is_null() {
    let json = serde_json::to_value(SessionState::signed_out()).unwrap();

    assert!(json["identity"].is_null());
    assert_that!(json["is_authenticated"].as_bool(), some(eq(false)));
}
