//! Port implementations over the infrastructure clients.

use std::collections::BTreeMap;
use std::sync::Arc;

use acceso_core::{AuthError, StoreError, UserId};
use acceso_infra::{
    http_client, FirestoreClient, FirestoreError, IdentityClient, IdentityError, MemoryBackend,
    MemoryError, SessionCell,
};
use anyhow::Context;

use crate::domain::BackendSettings;
use crate::ports::{AuthProvider, DocumentStore};

fn auth_error(err: IdentityError) -> AuthError {
    if err.is_email_exists() {
        return AuthError::AccountExists(err.to_string());
    }
    match err {
        IdentityError::Api { .. } => AuthError::Rejected(err.to_string()),
        IdentityError::Http(_) | IdentityError::Endpoint(_) => {
            AuthError::Transport(err.to_string())
        }
        IdentityError::NoSession(_) => AuthError::Unsupported(err.to_string()),
    }
}

fn store_error(err: FirestoreError) -> StoreError {
    if err.is_permission_denied() {
        return StoreError::PermissionDenied(err.to_string());
    }
    match err {
        FirestoreError::Http(_) => StoreError::Unavailable(err.to_string()),
        FirestoreError::Status { .. } | FirestoreError::Endpoint(_) => {
            StoreError::Backend(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for IdentityClient {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserId>, AuthError> {
        let account = self.sign_up(email, password).await.map_err(auth_error)?;
        Ok(account.local_id.map(UserId::from))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        let account = self
            .sign_in_with_password(email, password)
            .await
            .map_err(auth_error)?;
        account
            .local_id
            .map(UserId::from)
            .ok_or_else(|| AuthError::Rejected("sign-in returned no account id".into()))
    }

    async fn delete_account(&self, user_id: &UserId) -> Result<(), AuthError> {
        IdentityClient::delete_account(self, user_id.as_str())
            .await
            .map_err(auth_error)
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreClient {
    async fn put(
        &self,
        collection: &str,
        id: &UserId,
        fields: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        self.set_document(collection, id.as_str(), fields)
            .await
            .map_err(store_error)
    }
}

fn memory_auth_error(err: MemoryError) -> AuthError {
    match err {
        MemoryError::EmailExists(_) => AuthError::AccountExists(err.to_string()),
        MemoryError::InvalidCredentials | MemoryError::UnknownAccount(_) => {
            AuthError::Rejected(err.to_string())
        }
        MemoryError::WritesDisabled => AuthError::Unsupported(err.to_string()),
    }
}

#[async_trait::async_trait]
impl AuthProvider for MemoryBackend {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserId>, AuthError> {
        MemoryBackend::create_account(self, email, password)
            .map(|id| Some(UserId::from(id)))
            .map_err(memory_auth_error)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        MemoryBackend::sign_in(self, email, password)
            .map(UserId::from)
            .map_err(memory_auth_error)
    }

    async fn delete_account(&self, user_id: &UserId) -> Result<(), AuthError> {
        MemoryBackend::delete_account(self, user_id.as_str()).map_err(memory_auth_error)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryBackend {
    async fn put(
        &self,
        collection: &str,
        id: &UserId,
        fields: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        self.put_document(collection, id.as_str(), fields)
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

/// Identity and document clients for the hosted backend, sharing one session.
pub struct HostedBackend {
    pub identity: Arc<IdentityClient>,
    pub documents: Arc<FirestoreClient>,
}

impl HostedBackend {
    pub fn from_settings(settings: &BackendSettings) -> anyhow::Result<Self> {
        let api_key = settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .context("no API key configured")?;
        let project_id = settings
            .project_id
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .context("no project id configured")?;

        let client = http_client(settings.request_timeout())?;
        let session = SessionCell::new();
        Ok(Self {
            identity: Arc::new(IdentityClient::new(
                client.clone(),
                settings.identity_endpoint.clone(),
                api_key,
                session.clone(),
            )),
            documents: Arc::new(FirestoreClient::new(
                client,
                settings.firestore_endpoint.clone(),
                project_id,
                session,
            )),
        })
    }
}
