pub mod endpoint;
pub mod execute;
pub mod http;
pub mod params;
pub mod raw;
pub mod schema;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A selectable YouTrack entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Agile,
    Sprint,
    Issue,
    TimeTracking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    GetAll,
    GetById,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Agile => "agile",
            Resource::Sprint => "sprint",
            Resource::Issue => "issue",
            Resource::TimeTracking => "timeTracking",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::GetAll => "getAll",
            Operation::GetById => "getById",
        };
        f.write_str(name)
    }
}

/// A validated resource/operation pair. The endpoint table is exhaustive
/// over these, so the only place an unsupported combination can surface is
/// here, where the host's free strings are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSelection {
    pub resource: Resource,
    pub operation: Operation,
}

impl ResourceSelection {
    pub fn parse(resource: &str, operation: &str) -> Result<Self> {
        let parsed_resource = match resource {
            "agile" => Some(Resource::Agile),
            "sprint" => Some(Resource::Sprint),
            "issue" => Some(Resource::Issue),
            "timeTracking" => Some(Resource::TimeTracking),
            _ => None,
        };
        let parsed_operation = match operation {
            "getAll" => Some(Operation::GetAll),
            "getById" => Some(Operation::GetById),
            _ => None,
        };
        match (parsed_resource, parsed_operation) {
            (Some(resource), Some(operation)) => Ok(Self {
                resource,
                operation,
            }),
            _ => Err(Error::UnsupportedCombination {
                resource: resource.to_string(),
                operation: operation.to_string(),
            }),
        }
    }
}
