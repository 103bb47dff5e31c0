//! Client for the hosted identity REST API (`accounts:*` methods).
//!
//! Every successful sign-up or sign-in replaces the shared [`SessionCell`], which
//! the document client uses for authorization.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::net::{join_segments, NetError};
use crate::session::{Session, SessionCell};

/// Error code the API returns when the email is already registered.
pub const EMAIL_EXISTS: &str = "EMAIL_EXISTS";

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity api returned {status}: {code}")]
    Api { status: u16, code: String },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Endpoint(#[from] NetError),
    #[error("no signed-in session for account {0}")]
    NoSession(String),
}

impl IdentityError {
    /// Machine-readable code from an API error body, e.g. `EMAIL_EXISTS`.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            IdentityError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn is_email_exists(&self) -> bool {
        self.api_code() == Some(EMAIL_EXISTS)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityAccount {
    #[serde(default)]
    pub local_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// `"WEAK_PASSWORD : Password should be at least 6 characters"` -> `"WEAK_PASSWORD"`.
fn error_code(message: &str) -> String {
    message
        .split(" : ")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

pub struct IdentityClient {
    client: Client,
    endpoint: String,
    api_key: String,
    session: SessionCell,
}

impl IdentityClient {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        session: SessionCell,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            session,
        }
    }

    pub fn session(&self) -> &SessionCell {
        &self.session
    }

    fn method_url(&self, method: &str) -> Result<Url, IdentityError> {
        let mut url = join_segments(&self.endpoint, [method])?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn call<B, R>(&self, method: &str, body: &B) -> Result<R, IdentityError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let url = self.method_url(method)?;
        debug!(method, "identity request");

        let resp = self.client.post(url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let code = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| error_code(&e.error.message))
                .unwrap_or_default();
            let code = if code.is_empty() {
                status.to_string()
            } else {
                code
            };
            warn!(method, status = status.as_u16(), %code, "identity request rejected");
            return Err(IdentityError::Api {
                status: status.as_u16(),
                code,
            });
        }

        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Ok(R::default());
        }
        serde_json::from_str(&text).map_err(|e| IdentityError::Api {
            status: status.as_u16(),
            code: format!("MALFORMED_RESPONSE: {e}"),
        })
    }

    fn remember(&self, account: &IdentityAccount) {
        if let (Some(user_id), Some(id_token)) = (&account.local_id, &account.id_token) {
            self.session.set(Session {
                user_id: user_id.clone(),
                id_token: id_token.clone(),
            });
        }
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccount, IdentityError> {
        let account: IdentityAccount = self
            .call(
                "accounts:signUp",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        self.remember(&account);
        Ok(account)
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccount, IdentityError> {
        let account: IdentityAccount = self
            .call(
                "accounts:signInWithPassword",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        self.remember(&account);
        Ok(account)
    }

    /// Deletes `user_id`, which must be the account held by the current session.
    pub async fn delete_account(&self, user_id: &str) -> Result<(), IdentityError> {
        let session = self
            .session
            .current()
            .filter(|s| s.user_id == user_id)
            .ok_or_else(|| IdentityError::NoSession(user_id.to_string()))?;

        let _: serde_json::Value = self
            .call(
                "accounts:delete",
                &DeleteRequest {
                    id_token: &session.id_token,
                },
            )
            .await?;
        self.session.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_strips_description() {
        assert_eq!(error_code("EMAIL_EXISTS"), "EMAIL_EXISTS");
        assert_eq!(
            error_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            "WEAK_PASSWORD"
        );
        assert_eq!(error_code(""), "");
    }
}
