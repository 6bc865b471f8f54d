use thiserror::Error;

use crate::connector::{Operation, Resource};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported combination: {resource} / {operation}")]
    UnsupportedCombination { resource: String, operation: String },

    #[error("Missing required parameter '{field}' for {resource} / {operation}")]
    MissingParameter {
        field: &'static str,
        resource: Resource,
        operation: Operation,
    },

    #[error("Invalid HTTP method: {method}")]
    InvalidMethod { method: String },

    #[error("Invalid JSON in {part}: {source}")]
    InvalidJson {
        part: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object for {part}")]
    NotAnObject { part: &'static str },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTrack returned {status}: {body}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
