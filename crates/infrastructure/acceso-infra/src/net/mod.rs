use std::time::Duration;

use reqwest::{Client, Url};

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("invalid endpoint {endpoint}: {reason}")]
    Endpoint { endpoint: String, reason: String },
}

/// Shared client for both backend services. The timeout applies per request.
pub fn http_client(timeout: Duration) -> Result<Client, NetError> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("acceso/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Appends path segments to a base endpoint, percent-encoding each one.
pub(crate) fn join_segments<'a>(
    endpoint: &str,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, NetError> {
    let mut url = Url::parse(endpoint).map_err(|e| NetError::Endpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|_| NetError::Endpoint {
            endpoint: endpoint.to_string(),
            reason: "cannot be a base url".into(),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_base_path_and_encodes() {
        let url = join_segments("https://host/v1/", ["projects", "a b", "(default)"]).unwrap();
        assert_eq!(url.as_str(), "https://host/v1/projects/a%20b/(default)");

        let url = join_segments("https://host/v1", ["x"]).unwrap();
        assert_eq!(url.as_str(), "https://host/v1/x");
    }

    #[test]
    fn join_rejects_garbage() {
        assert!(join_segments("not a url", ["x"]).is_err());
        assert!(join_segments("mailto:someone@example.com", ["x"]).is_err());
    }
}
