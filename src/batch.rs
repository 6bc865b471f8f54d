use serde::Deserialize;
use serde_json::{Map, Value};

use crate::connector::raw::RawRequest;
use crate::model::record::InputRecord;

/// The host-role input document: a configured action plus the records to
/// run it over. When `request` is present the batch runs in generic-request
/// mode and the structured fields are ignored; otherwise resource/operation
/// select an endpoint from the table.
#[derive(Debug, Deserialize)]
pub struct Batch {
    #[serde(default = "default_resource")]
    pub resource: String,
    #[serde(default = "default_operation")]
    pub operation: String,
    /// Batch-level parameter defaults; a record's own fields override
    /// these per record.
    #[serde(default)]
    pub parameters: Map<String, Value>,
    pub request: Option<RawRequest>,
    #[serde(default)]
    pub items: Vec<InputRecord>,
}

fn default_resource() -> String {
    "agile".into()
}

fn default_operation() -> String {
    "getAll".into()
}
