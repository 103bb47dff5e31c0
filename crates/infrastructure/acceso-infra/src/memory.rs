//! Process-local stand-in for the hosted backend, for dry runs and tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    #[error("email already registered: {0}")]
    EmailExists(String),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("unknown account {0}")]
    UnknownAccount(String),
    #[error("document writes are disabled")]
    WritesDisabled,
}

struct Account {
    user_id: String,
    password: String,
}

#[derive(Default)]
struct MemoryState {
    // Keyed by lowercased email.
    accounts: HashMap<String, Account>,
    documents: BTreeMap<(String, String), BTreeMap<String, String>>,
}

#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
    reject_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following document write fail, to exercise partial registrations.
    pub fn reject_document_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MemoryState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn create_account(&self, email: &str, password: &str) -> Result<String, MemoryError> {
        let key = email.trim().to_lowercase();
        self.with_state(|state| {
            if state.accounts.contains_key(&key) {
                return Err(MemoryError::EmailExists(key));
            }
            let user_id = uuid::Uuid::new_v4().simple().to_string();
            state.accounts.insert(
                key,
                Account {
                    user_id: user_id.clone(),
                    password: password.to_string(),
                },
            );
            Ok(user_id)
        })
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<String, MemoryError> {
        let key = email.trim().to_lowercase();
        self.with_state(|state| match state.accounts.get(&key) {
            Some(account) if account.password == password => Ok(account.user_id.clone()),
            _ => Err(MemoryError::InvalidCredentials),
        })
    }

    pub fn delete_account(&self, user_id: &str) -> Result<(), MemoryError> {
        self.with_state(|state| {
            let before = state.accounts.len();
            state.accounts.retain(|_, a| a.user_id != user_id);
            if state.accounts.len() == before {
                return Err(MemoryError::UnknownAccount(user_id.to_string()));
            }
            Ok(())
        })
    }

    pub fn put_document(
        &self,
        collection: &str,
        id: &str,
        fields: &BTreeMap<String, String>,
    ) -> Result<(), MemoryError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(MemoryError::WritesDisabled);
        }
        self.with_state(|state| {
            state
                .documents
                .insert((collection.to_string(), id.to_string()), fields.clone());
        });
        Ok(())
    }

    pub fn document(&self, collection: &str, id: &str) -> Option<BTreeMap<String, String>> {
        self.with_state(|state| {
            state
                .documents
                .get(&(collection.to_string(), id.to_string()))
                .cloned()
        })
    }

    pub fn account_count(&self) -> usize {
        self.with_state(|state| state.accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounts_are_unique_per_email_case_insensitively() {
        let backend = MemoryBackend::new();
        let id = backend.create_account("Ana@Example.com", "secret1").unwrap();

        assert_eq!(
            backend.create_account("ana@example.com", "other1"),
            Err(MemoryError::EmailExists("ana@example.com".into()))
        );
        assert_eq!(backend.sign_in("ANA@example.com", "secret1"), Ok(id));
        assert_eq!(
            backend.sign_in("ana@example.com", "wrong"),
            Err(MemoryError::InvalidCredentials)
        );
    }

    #[test]
    fn delete_and_documents() {
        let backend = MemoryBackend::new();
        let id = backend.create_account("a@b.com", "secret1").unwrap();
        let fields = BTreeMap::from([("name".to_string(), "Ana".to_string())]);

        backend.put_document("users", &id, &fields).unwrap();
        assert_eq!(backend.document("users", &id), Some(fields.clone()));

        backend.reject_document_writes(true);
        assert_eq!(
            backend.put_document("users", &id, &fields),
            Err(MemoryError::WritesDisabled)
        );

        backend.delete_account(&id).unwrap();
        assert_eq!(backend.account_count(), 0);
        assert!(backend.delete_account(&id).is_err());
    }
}
