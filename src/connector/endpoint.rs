//! Maps a resource/operation selection plus its parameters to a concrete
//! API path and query. Field selectors are fixed literals following the
//! YouTrack sparse-fieldset convention.

use super::params::ParameterSet;
use super::schema;
use super::{Operation, Resource, ResourceSelection};
use crate::error::Result;

/// Resolve the endpoint (path + query) for one record. Pure function of
/// its inputs; the caller prepends the credential base URL.
pub fn resolve(selection: ResourceSelection, params: &ParameterSet) -> Result<String> {
    let endpoint = match (selection.resource, selection.operation) {
        (Resource::Agile, Operation::GetAll) => {
            "/api/agiles?fields=id,name,summary,projects(id,name)".to_string()
        }
        (Resource::Agile, Operation::GetById) => {
            let project_id = params.require(schema::PROJECT_ID, selection)?;
            format!("/api/agiles?fields=id,name,summary,project({project_id})")
        }
        (Resource::Sprint, Operation::GetAll) => {
            let agile_id = params.require(schema::AGILE_ID, selection)?;
            format!("/api/agiles/{agile_id}/sprints?fields=id,name,goal,start,finish")
        }
        (Resource::Sprint, Operation::GetById) => {
            let agile_id = params.require(schema::AGILE_ID, selection)?;
            let sprint_id = params.require(schema::SPRINT_ID, selection)?;
            format!("/api/agiles/{agile_id}/sprints/{sprint_id}?fields=id,name,goal,start,finish")
        }
        (Resource::Issue, Operation::GetAll) => {
            let agile_id = params.require(schema::AGILE_ID_FOR_ISSUES, selection)?;
            let sprint_id = params.require(schema::SPRINT_ID, selection)?;
            format!(
                "/api/agiles/{agile_id}/sprints/{sprint_id}/issues?fields=idReadable,summary,customFields(name,value(name))"
            )
        }
        (Resource::Issue, Operation::GetById) => {
            let issue_id = params.require(schema::ISSUE_ID, selection)?;
            format!("/api/issues/{issue_id}?fields=idReadable,summary,customFields(name,value(name))")
        }
        // Work items hang off the issue regardless of operation.
        (Resource::TimeTracking, _) => {
            let issue_id = params.require(schema::ISSUE_ID, selection)?;
            format!(
                "/api/issues/{issue_id}/timeTracking/workItems?fields=duration(minutes),author(name),text,issue(idReadable)"
            )
        }
    };
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn resolve_with(resource: &str, operation: &str, fields: &[(&str, &str)]) -> Result<String> {
        let mut defaults = Map::new();
        for (key, value) in fields {
            defaults.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        let item = Map::new();
        let params = ParameterSet::new(&defaults, &item);
        let selection = ResourceSelection::parse(resource, operation).unwrap();
        resolve(selection, &params)
    }

    #[test]
    fn resolves_every_table_row() {
        let cases: &[(&str, &str, &[(&str, &str)], &str)] = &[
            (
                "agile",
                "getAll",
                &[],
                "/api/agiles?fields=id,name,summary,projects(id,name)",
            ),
            (
                "agile",
                "getById",
                &[("projectId", "P1")],
                "/api/agiles?fields=id,name,summary,project(P1)",
            ),
            (
                "sprint",
                "getAll",
                &[("agileId", "A1")],
                "/api/agiles/A1/sprints?fields=id,name,goal,start,finish",
            ),
            (
                "sprint",
                "getById",
                &[("agileId", "A1"), ("sprintId", "S1")],
                "/api/agiles/A1/sprints/S1?fields=id,name,goal,start,finish",
            ),
            (
                "issue",
                "getAll",
                &[("agileIdForIssues", "A1"), ("sprintId", "S1")],
                "/api/agiles/A1/sprints/S1/issues?fields=idReadable,summary,customFields(name,value(name))",
            ),
            (
                "issue",
                "getById",
                &[("issueId", "I-1")],
                "/api/issues/I-1?fields=idReadable,summary,customFields(name,value(name))",
            ),
            (
                "timeTracking",
                "getAll",
                &[("issueId", "I-1")],
                "/api/issues/I-1/timeTracking/workItems?fields=duration(minutes),author(name),text,issue(idReadable)",
            ),
            (
                "timeTracking",
                "getById",
                &[("issueId", "I-1")],
                "/api/issues/I-1/timeTracking/workItems?fields=duration(minutes),author(name),text,issue(idReadable)",
            ),
        ];

        for (resource, operation, fields, expected) in cases {
            let endpoint = resolve_with(resource, operation, fields).unwrap();
            assert_eq!(&endpoint, expected, "{resource}/{operation}");
        }
    }

    #[test]
    fn missing_parameter_fails_resolution() {
        let err = resolve_with("agile", "getById", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'projectId' for agile / getById"
        );
    }

    #[test]
    fn identifiers_are_interpolated_verbatim() {
        // No URL-encoding is applied; an already-encoded or malformed ID
        // passes through unchanged.
        let endpoint =
            resolve_with("issue", "getById", &[("issueId", "DEMO%2D1 x")]).unwrap();
        assert_eq!(
            endpoint,
            "/api/issues/DEMO%2D1 x?fields=idReadable,summary,customFields(name,value(name))"
        );
    }

    #[test]
    fn item_level_parameter_overrides_default() {
        let mut defaults = Map::new();
        defaults.insert("agileId".into(), json!("A-default"));
        defaults.insert("sprintId".into(), json!("S1"));
        let mut item = Map::new();
        item.insert("agileId".into(), json!("A-item"));
        let params = ParameterSet::new(&defaults, &item);
        let selection = ResourceSelection::parse("sprint", "getById").unwrap();
        let endpoint = resolve(selection, &params).unwrap();
        assert_eq!(
            endpoint,
            "/api/agiles/A-item/sprints/S1?fields=id,name,goal,start,finish"
        );
    }
}
