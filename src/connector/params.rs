use serde_json::{Map, Value};

use super::ResourceSelection;
use crate::error::{Error, Result};

/// Per-record view of the action parameters: a field on the record itself
/// overrides the batch-level default of the same name. Values are opaque
/// strings; they are interpolated into the URL exactly as supplied, so a
/// malformed ID produces a malformed URL, not a validation error.
pub struct ParameterSet<'a> {
    defaults: &'a Map<String, Value>,
    item: &'a Map<String, Value>,
}

impl<'a> ParameterSet<'a> {
    pub fn new(defaults: &'a Map<String, Value>, item: &'a Map<String, Value>) -> Self {
        Self { defaults, item }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.item
            .get(key)
            .or_else(|| self.defaults.get(key))
            .and_then(value_to_string)
    }

    pub fn require(&self, key: &'static str, selection: ResourceSelection) -> Result<String> {
        self.get(key).ok_or(Error::MissingParameter {
            field: key,
            resource: selection.resource,
            operation: selection.operation,
        })
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_field_wins_over_default() {
        let mut defaults = Map::new();
        defaults.insert("sprintId".into(), json!("S-default"));
        let mut item = Map::new();
        item.insert("sprintId".into(), json!("S-item"));
        let params = ParameterSet::new(&defaults, &item);
        assert_eq!(params.get("sprintId").as_deref(), Some("S-item"));
    }

    #[test]
    fn falls_back_to_default() {
        let mut defaults = Map::new();
        defaults.insert("agileId".into(), json!("A1"));
        let item = Map::new();
        let params = ParameterSet::new(&defaults, &item);
        assert_eq!(params.get("agileId").as_deref(), Some("A1"));
    }

    #[test]
    fn numbers_coerce_to_strings() {
        let mut item = Map::new();
        item.insert("issueId".into(), json!(42));
        let defaults = Map::new();
        let params = ParameterSet::new(&defaults, &item);
        assert_eq!(params.get("issueId").as_deref(), Some("42"));
    }

    #[test]
    fn missing_key_is_none() {
        let defaults = Map::new();
        let item = Map::new();
        let params = ParameterSet::new(&defaults, &item);
        assert_eq!(params.get("projectId"), None);
    }

    #[test]
    fn require_names_field_and_selection() {
        let defaults = Map::new();
        let item = Map::new();
        let params = ParameterSet::new(&defaults, &item);
        let selection = ResourceSelection::parse("agile", "getById").unwrap();
        let err = params.require("projectId", selection).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'projectId' for agile / getById"
        );
    }
}
