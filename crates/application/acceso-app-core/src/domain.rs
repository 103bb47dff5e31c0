use acceso_core::AuthState;
use serde::{Deserialize, Serialize};

/// Result of calling `submit` on a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Another attempt was in flight; nothing was validated, called or changed.
    Ignored,
    /// The attempt ran to completion and left the flow in this state.
    Finished(AuthState),
}

impl Submission {
    pub fn final_state(&self) -> Option<&AuthState> {
        match self {
            Submission::Ignored => None,
            Submission::Finished(state) => Some(state),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOptions {
    /// Delete the freshly created account when its profile document cannot be written.
    pub rollback_orphaned_accounts: bool,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            rollback_orphaned_accounts: true,
        }
    }
}

fn default_identity_endpoint() -> String {
    acceso_config::DEFAULT_IDENTITY_ENDPOINT.to_string()
}

fn default_firestore_endpoint() -> String {
    acceso_config::DEFAULT_FIRESTORE_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    acceso_config::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

/// Connection settings for the hosted backend, persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_identity_endpoint")]
    pub identity_endpoint: String,
    #[serde(default = "default_firestore_endpoint")]
    pub firestore_endpoint: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub rollback_orphaned_accounts: bool,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            project_id: None,
            identity_endpoint: default_identity_endpoint(),
            firestore_endpoint: default_firestore_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            rollback_orphaned_accounts: true,
        }
    }
}

impl BackendSettings {
    pub fn register_options(&self) -> RegisterOptions {
        RegisterOptions {
            rollback_orphaned_accounts: self.rollback_orphaned_accounts,
        }
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(acceso_config::clamp_timeout_secs(
            self.request_timeout_secs,
        ))
    }
}
