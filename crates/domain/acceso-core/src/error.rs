use crate::messages;

/// Local form checks, raised before any backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("account already exists: {0}")]
    AccountExists(String),
    #[error("rejected by identity provider: {0}")]
    Rejected(String),
    #[error("identity provider unreachable: {0}")]
    Transport(String),
    #[error("unsupported by identity provider: {0}")]
    Unsupported(String),
}

/// Coarse classification the flows branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    AccountExists,
    Other,
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::AccountExists(_) => AuthErrorKind::AccountExists,
            AuthError::Rejected(_) | AuthError::Transport(_) | AuthError::Unsupported(_) => {
                AuthErrorKind::Other
            }
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("document write not permitted: {0}")]
    PermissionDenied(String),
    #[error("document store unreachable: {0}")]
    Unavailable(String),
    #[error("document store error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    PermissionDenied,
    Unavailable,
    Backend,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::PermissionDenied(_) => StoreErrorKind::PermissionDenied,
            StoreError::Unavailable(_) => StoreErrorKind::Unavailable,
            StoreError::Backend(_) => StoreErrorKind::Backend,
        }
    }
}

/// Every way a submit can fail. Collapsed into `AuthState::Error` at the flow boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("sign-in failed: {0}")]
    SignIn(AuthError),
    #[error("account creation failed: {0}")]
    CreateAccount(AuthError),
    #[error("account creation returned no user id")]
    MissingUserId,
    #[error("profile write failed: {0}")]
    ProfileWrite(StoreError),
}

impl FlowError {
    /// Message shown to the user. Unknown remote failures fall back to the generic text.
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Validation(e) => e.to_string(),
            FlowError::SignIn(_) => messages::LOGIN_FAILED.to_string(),
            FlowError::CreateAccount(e) if e.kind() == AuthErrorKind::AccountExists => {
                messages::EMAIL_IN_USE.to_string()
            }
            FlowError::CreateAccount(_) | FlowError::MissingUserId | FlowError::ProfileWrite(_) => {
                messages::REGISTRATION_FAILED.to_string()
            }
        }
    }
}
