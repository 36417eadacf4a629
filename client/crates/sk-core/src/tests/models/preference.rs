use crate::{ColorScheme, CoreError, Preference};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_preference_default_is_system() {
    assert_eq!(Preference::default(), Preference::System);
}

#[test]
fn test_preference_as_str() {
    assert_eq!(Preference::Light.as_str(), "light");
    assert_eq!(Preference::Dark.as_str(), "dark");
    assert_eq!(Preference::System.as_str(), "system");
}

#[test]
fn test_preference_from_str_accepts_every_variant() {
    for preference in Preference::ALL {
        assert_eq!(Preference::from_str(preference.as_str()).unwrap(), preference);
    }
}

#[test]
fn given_unknown_value_when_parsed_then_invalid_preference() {
    let result = Preference::from_str("sepia");

    match result {
        Err(CoreError::InvalidPreference { value, .. }) => assert_eq!(value, "sepia"),
        other => panic!("Expected InvalidPreference, got {other:?}"),
    }
}

#[test]
fn given_wrong_case_when_parsed_then_rejected() {
    assert!(Preference::from_str("Dark").is_err());
    assert!(Preference::from_str("").is_err());
}

#[test]
fn given_explicit_preference_when_resolved_then_ignores_device() {
    assert_that!(Preference::Light.resolve(true), eq(ColorScheme::Light));
    assert_that!(Preference::Dark.resolve(false), eq(ColorScheme::Dark));
}

#[test]
fn given_system_preference_when_resolved_then_follows_device() {
    assert_that!(Preference::System.resolve(true), eq(ColorScheme::Dark));
    assert_that!(Preference::System.resolve(false), eq(ColorScheme::Light));
}

#[test]
fn given_preference_when_serialized_then_lowercase_string() {
    let json = serde_json::to_string(&Preference::Dark).unwrap();

    assert_that!(json.as_str(), eq("\"dark\""));
}
