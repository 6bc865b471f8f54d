//! The parameter-schema layer: which input fields exist, and under which
//! resource/operation combinations each one is required. The host's form
//! hides a field unless one of its combinations is selected, so presence
//! is checked here, before endpoint resolution, and an absent field is a
//! configuration error rather than a dangling lookup.

use serde::Serialize;

use super::params::ParameterSet;
use super::{Operation, Resource, ResourceSelection};
use crate::error::{Error, Result};

pub const PROJECT_ID: &str = "projectId";
pub const AGILE_ID: &str = "agileId";
pub const AGILE_ID_FOR_ISSUES: &str = "agileIdForIssues";
pub const SPRINT_ID: &str = "sprintId";
pub const ISSUE_ID: &str = "issueId";

pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required_when: &'static [(Resource, Operation)],
}

impl FieldSpec {
    pub fn required_for(&self, selection: ResourceSelection) -> bool {
        self.required_when
            .iter()
            .any(|&(resource, operation)| {
                resource == selection.resource && operation == selection.operation
            })
    }
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: PROJECT_ID,
        label: "Project ID",
        required_when: &[(Resource::Agile, Operation::GetById)],
    },
    FieldSpec {
        key: AGILE_ID,
        label: "Agile ID",
        required_when: &[
            (Resource::Sprint, Operation::GetAll),
            (Resource::Sprint, Operation::GetById),
        ],
    },
    FieldSpec {
        key: AGILE_ID_FOR_ISSUES,
        label: "Agile ID",
        required_when: &[(Resource::Issue, Operation::GetAll)],
    },
    FieldSpec {
        key: SPRINT_ID,
        label: "Sprint ID",
        required_when: &[
            (Resource::Sprint, Operation::GetById),
            (Resource::Issue, Operation::GetAll),
        ],
    },
    FieldSpec {
        key: ISSUE_ID,
        label: "Issue ID",
        required_when: &[
            (Resource::Issue, Operation::GetById),
            (Resource::TimeTracking, Operation::GetAll),
            (Resource::TimeTracking, Operation::GetById),
        ],
    },
];

/// Keys required for the given selection, in schema order.
pub fn required_fields(selection: ResourceSelection) -> Vec<&'static str> {
    FIELDS
        .iter()
        .filter(|field| field.required_for(selection))
        .map(|field| field.key)
        .collect()
}

/// Check that every field the selection requires is present. Runs before
/// endpoint resolution so a missing parameter never reaches the resolver
/// and no HTTP call is issued for the record.
pub fn validate(selection: ResourceSelection, params: &ParameterSet) -> Result<()> {
    for key in required_fields(selection) {
        if params.get(key).is_none() {
            return Err(Error::MissingParameter {
                field: key,
                resource: selection.resource,
                operation: selection.operation,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Descriptor {
    pub resources: Vec<OptionSpec>,
    pub operations: Vec<OptionSpec>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Serialize)]
pub struct OptionSpec {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "requiredWhen")]
    pub required_when: Vec<SelectionRef>,
}

#[derive(Debug, Serialize)]
pub struct SelectionRef {
    pub resource: Resource,
    pub operation: Operation,
}

/// The selectable resources, operations, and conditional fields, in the
/// shape a host form can render.
pub fn descriptor() -> Descriptor {
    Descriptor {
        resources: vec![
            OptionSpec { name: "Agile", value: "agile" },
            OptionSpec { name: "Sprint", value: "sprint" },
            OptionSpec { name: "Issue", value: "issue" },
            OptionSpec { name: "Logged Time", value: "timeTracking" },
        ],
        operations: vec![
            OptionSpec { name: "Get Many", value: "getAll" },
            OptionSpec { name: "Get by ID", value: "getById" },
        ],
        fields: FIELDS
            .iter()
            .map(|field| FieldDescriptor {
                key: field.key,
                label: field.label,
                required_when: field
                    .required_when
                    .iter()
                    .map(|&(resource, operation)| SelectionRef {
                        resource,
                        operation,
                    })
                    .collect(),
            })
            .collect(),
    }
}
