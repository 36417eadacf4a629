use crate::Identity;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Current authentication state as seen by the client.
///
/// The authenticated flag is derived from the identity, so the two can never
/// disagree: a state is either signed in with an identity or signed out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    identity: Option<Identity>,
}

impl SessionState {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn signed_out() -> Self {
        Self { identity: None }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn into_identity(self) -> Option<Identity> {
        self.identity
    }
}

impl Serialize for SessionState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SessionState", 2)?;
        state.serialize_field("identity", &self.identity)?;
        state.serialize_field("is_authenticated", &self.is_authenticated())?;
        state.end()
    }
}
