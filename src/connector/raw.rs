//! The generic-request mode: the caller fully specifies an arbitrary HTTP
//! request against the credentialed instance, for endpoints the structured
//! actions do not cover.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::http::RequestSpec;
use crate::credential::Credential;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct RawRequest {
    #[serde(default = "default_method")]
    pub method: String,
    pub url: String,
    pub query: Option<PartSpec>,
    pub headers: Option<PartSpec>,
    pub body: Option<PartSpec>,
}

fn default_method() -> String {
    "GET".into()
}

/// One request part, supplied either as an ordered list of name/value
/// pairs or as a raw JSON string. The mode flag selects exactly one
/// representation; the other is never consulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum PartSpec {
    Pairs { pairs: Vec<Pair> },
    Json { json: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pair {
    pub name: String,
    pub value: String,
}

impl RawRequest {
    /// Build the dispatchable request. Credential headers are applied
    /// first, caller headers appended after. Body content is JSON only.
    pub fn assemble(&self, credential: &Credential) -> Result<RequestSpec> {
        let method = Method::from_bytes(self.method.to_uppercase().as_bytes())
            .map_err(|_| Error::InvalidMethod {
                method: self.method.clone(),
            })?;

        let mut uri = if self.url.contains("://") {
            self.url.clone()
        } else if self.url.starts_with('/') {
            format!("{}{}", credential.base_url(), self.url)
        } else {
            format!("{}/{}", credential.base_url(), self.url)
        };

        if let Some(part) = &self.query {
            let entries = part.entries("query")?;
            if !entries.is_empty() {
                let joined = entries
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join("&");
                uri.push(if uri.contains('?') { '&' } else { '?' });
                uri.push_str(&joined);
            }
        }

        let mut headers = credential.headers();
        if let Some(part) = &self.headers {
            headers.extend(part.entries("headers")?);
        }

        let body = match &self.body {
            Some(part) => Some(part.body_value()?),
            None => None,
        };

        Ok(RequestSpec {
            method,
            uri,
            headers,
            body,
        })
    }
}

impl PartSpec {
    fn entries(&self, part: &'static str) -> Result<Vec<(String, String)>> {
        match self {
            PartSpec::Pairs { pairs } => Ok(pairs
                .iter()
                .map(|pair| (pair.name.clone(), pair.value.clone()))
                .collect()),
            PartSpec::Json { json } => {
                let value: Value = serde_json::from_str(json)
                    .map_err(|source| Error::InvalidJson { part, source })?;
                let Value::Object(object) = value else {
                    return Err(Error::NotAnObject { part });
                };
                Ok(object
                    .into_iter()
                    .map(|(name, value)| (name, scalar_string(&value)))
                    .collect())
            }
        }
    }

    fn body_value(&self) -> Result<Value> {
        match self {
            PartSpec::Pairs { pairs } => {
                let mut object = Map::new();
                for pair in pairs {
                    object.insert(pair.name.clone(), Value::String(pair.value.clone()));
                }
                Ok(Value::Object(object))
            }
            PartSpec::Json { json } => serde_json::from_str(json)
                .map_err(|source| Error::InvalidJson { part: "body", source }),
        }
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
