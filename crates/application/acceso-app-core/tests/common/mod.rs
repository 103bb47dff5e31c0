#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use acceso_app_core::ports::{AuthProvider, DocumentStore};
use acceso_core::{AuthError, StoreError, UserId};
use tokio::sync::Semaphore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCall {
    CreateAccount { email: String, password: String },
    SignIn { email: String, password: String },
    DeleteAccount(UserId),
}

pub struct StubAuth {
    create_result: Result<Option<UserId>, AuthError>,
    sign_in_result: Result<UserId, AuthError>,
    delete_result: Result<(), AuthError>,
    gate: Option<Arc<Semaphore>>,
    pub calls: Mutex<Vec<AuthCall>>,
}

impl StubAuth {
    pub fn new() -> Self {
        Self {
            create_result: Ok(Some(UserId::from("u1"))),
            sign_in_result: Ok(UserId::from("u1")),
            delete_result: Ok(()),
            gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn create_returns(mut self, result: Result<Option<UserId>, AuthError>) -> Self {
        self.create_result = result;
        self
    }

    pub fn sign_in_returns(mut self, result: Result<UserId, AuthError>) -> Self {
        self.sign_in_result = result;
        self
    }

    pub fn delete_returns(mut self, result: Result<(), AuthError>) -> Self {
        self.delete_result = result;
        self
    }

    /// Every create/sign-in call waits for one permit.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for StubAuth {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserId>, AuthError> {
        self.calls.lock().unwrap().push(AuthCall::CreateAccount {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.pass_gate().await;
        self.create_result.clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        self.calls.lock().unwrap().push(AuthCall::SignIn {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.pass_gate().await;
        self.sign_in_result.clone()
    }

    async fn delete_account(&self, user_id: &UserId) -> Result<(), AuthError> {
        self.calls
            .lock()
            .unwrap()
            .push(AuthCall::DeleteAccount(user_id.clone()));
        self.delete_result.clone()
    }
}

/// Provider that keeps the trait's default `delete_account`.
pub struct NoDeleteAuth;

#[async_trait::async_trait]
impl AuthProvider for NoDeleteAuth {
    async fn create_account(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Option<UserId>, AuthError> {
        Ok(Some(UserId::from("u9")))
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<UserId, AuthError> {
        Ok(UserId::from("u9"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCall {
    pub collection: String,
    pub id: UserId,
    pub fields: BTreeMap<String, String>,
}

pub struct StubStore {
    result: Result<(), StoreError>,
    pub calls: Mutex<Vec<PutCall>>,
}

impl StubStore {
    pub fn ok() -> Self {
        Self {
            result: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: StoreError) -> Self {
        Self {
            result: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PutCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocumentStore for StubStore {
    async fn put(
        &self,
        collection: &str,
        id: &UserId,
        fields: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(PutCall {
            collection: collection.to_string(),
            id: id.clone(),
            fields: fields.clone(),
        });
        self.result.clone()
    }
}

pub fn fields(name: &str, email: &str, role: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("name".to_string(), name.to_string()),
        ("email".to_string(), email.to_string()),
        ("role".to_string(), role.to_string()),
    ])
}
