use serde::{Deserialize, Serialize};

/// Progress of a single login or registration attempt.
///
/// `Success` and `Error` are terminal for the attempt; a new submit starts over
/// from either of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthState::Success)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AuthState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the attempt has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, AuthState::Success | AuthState::Error(_))
    }
}
