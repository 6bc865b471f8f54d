use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::{Error, Result};

/// A fully resolved HTTP request, ready for dispatch. Built fresh per
/// input record and never reused.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// The dispatch boundary. The connector never talks to the network
/// directly; the execution loop hands every `RequestSpec` to this trait
/// and gets parsed JSON back.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn dispatch(&self, spec: &RequestSpec) -> Result<Value>;
}

/// Production client backed by `reqwest`. No timeout, retry, or pooling
/// policy is layered on top of the reqwest defaults.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn dispatch(&self, spec: &RequestSpec) -> Result<Value> {
        let mut request = self.client.request(spec.method.clone(), &spec.uri);
        for (name, value) in &spec.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
