//! Central configuration constants for validation rules, storage layout and backend defaults.

/// Minimum password length accepted at registration, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Document collection holding one profile per registered account.
pub const USERS_COLLECTION: &str = "users";

/// Role assigned to every self-registered account.
pub const DEFAULT_ROLE: &str = "employee";

/// Default base URL of the hosted identity REST API.
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Default base URL of the hosted document REST API.
pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

/// Default per-request timeout for backend calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum allowed request timeout, in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Environment variable consulted for the backend API key.
pub const API_KEY_ENV: &str = "ACCESO_API_KEY";

/// Environment variable consulted for the backend project id.
pub const PROJECT_ID_ENV: &str = "ACCESO_PROJECT_ID";

/// Convenience function to clamp a timeout value into allowed range.
pub fn clamp_timeout_secs(v: u64) -> u64 {
    v.clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
}
