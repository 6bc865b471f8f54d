use reqwest::Method;

use crate::connector::http::{HttpClient, RequestSpec};
use crate::error::{Error, Result};

/// YouTrack credentials: base URL plus permanent token. Shared read-only
/// across all records of a batch.
#[derive(Debug, Clone)]
pub struct Credential {
    base_url: String,
    token: String,
}

impl Credential {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Header set applied to every call, the self-test included.
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Authorization".into(), format!("Bearer {}", self.token)),
            ("Accept".into(), "application/json".into()),
            ("Content-Type".into(), "application/json".into()),
        ]
    }

    /// The credential self-test request the host issues: `GET {base}/`
    /// with the standard headers.
    pub fn test_request(&self) -> RequestSpec {
        RequestSpec {
            method: Method::GET,
            uri: format!("{}/", self.base_url),
            headers: self.headers(),
            body: None,
        }
    }

    /// Issue the self-test call. The instance root serves HTML, so a JSON
    /// decode failure on a successful status still counts as reachable;
    /// transport and HTTP-status errors fail the check.
    pub async fn verify(&self, client: &dyn HttpClient) -> Result<()> {
        match client.dispatch(&self.test_request()).await {
            Ok(_) => Ok(()),
            Err(Error::Http(e)) if e.is_decode() => Ok(()),
            Err(e) => Err(e),
        }
    }
}
