use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Registration;

/// Profile document stored alongside each account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserProfile {
    /// Profile for a self-registered account; always gets the default role.
    pub fn employee(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: acceso_config::DEFAULT_ROLE.to_string(),
        }
    }

    pub fn from_registration(reg: &Registration) -> Self {
        Self::employee(reg.name.clone(), reg.email.clone())
    }

    /// Flat string fields as written to the document store.
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
            ("role".to_string(), self.role.clone()),
        ])
    }
}
