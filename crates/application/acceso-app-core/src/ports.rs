use std::collections::BTreeMap;

use acceso_core::{AuthError, StoreError, UserId};

/// Hosted authentication service.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync + 'static {
    /// Creates an account. `Ok(None)` means the provider reported success
    /// without handing back a user record.
    async fn create_account(&self, email: &str, password: &str)
        -> Result<Option<UserId>, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId, AuthError>;

    /// Removes an account created earlier in this session.
    async fn delete_account(&self, user_id: &UserId) -> Result<(), AuthError> {
        Err(AuthError::Unsupported(format!(
            "cannot delete account {user_id}"
        )))
    }
}

/// Hosted document store. `put` replaces the whole document.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    async fn put(
        &self,
        collection: &str,
        id: &UserId,
        fields: &BTreeMap<String, String>,
    ) -> Result<(), StoreError>;
}
