use serde::{Deserialize, Serialize};
use std::fmt;

pub mod credentials;
pub mod error;
pub mod messages;
pub mod profile;
pub mod state;
pub mod validation;

pub use credentials::{LoginCredentials, Registration};
pub use error::{AuthError, AuthErrorKind, FlowError, StoreError, StoreErrorKind, ValidationError};
pub use profile::UserProfile;
pub use state::AuthState;
pub use validation::{is_blank, validate_registration};

/// Opaque account identifier issued by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An identifier the document store can key on.
    pub fn is_usable(&self) -> bool {
        !is_blank(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
