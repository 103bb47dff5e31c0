use std::sync::{Arc, PoisonError, RwLock};

/// Tokens for the account most recently signed up or signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub id_token: String,
}

/// In-memory session shared by the identity and document clients, so document
/// writes carry the caller's credentials. Never written to disk.
#[derive(Debug, Clone, Default)]
pub struct SessionCell {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn id_token(&self) -> Option<String> {
        self.current().map(|s| s.id_token)
    }

    pub fn set(&self, session: Session) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
