use std::collections::BTreeMap;

use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::net::{join_segments, NetError};
use crate::session::SessionCell;

#[derive(Debug, thiserror::Error)]
pub enum FirestoreError {
    #[error("document api returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Endpoint(#[from] NetError),
}

impl FirestoreError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FirestoreError::Status { status, .. } => Some(*status),
            FirestoreError::Http(e) => e.status().map(|s| s.as_u16()),
            FirestoreError::Endpoint(_) => None,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self.status().and_then(|s| StatusCode::from_u16(s).ok()),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}

/// Wire form of a flat string document: `{"fields": {"k": {"stringValue": "v"}}}`.
pub fn encode_string_fields(fields: &BTreeMap<String, String>) -> Value {
    let encoded: Map<String, Value> = fields
        .iter()
        .map(|(k, v)| (k.clone(), json!({ "stringValue": v })))
        .collect();
    json!({ "fields": encoded })
}

pub struct FirestoreClient {
    client: Client,
    endpoint: String,
    project_id: String,
    session: SessionCell,
}

impl FirestoreClient {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        session: SessionCell,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            project_id: project_id.into(),
            session,
        }
    }

    /// Writes the document, replacing any existing one with the same id.
    pub async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: &BTreeMap<String, String>,
    ) -> Result<(), FirestoreError> {
        let url = join_segments(
            &self.endpoint,
            [
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                collection,
                id,
            ],
        )?;
        debug!(collection, id, "document write");

        let mut req = self.client.patch(url).json(&encode_string_fields(fields));
        if let Some(token) = self.session.id_token() {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(collection, id, status = status.as_u16(), "document write rejected");
            return Err(FirestoreError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
