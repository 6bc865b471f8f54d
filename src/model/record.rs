use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the input batch. The `json` envelope matches the wire
/// shape the host uses for item data; fields inside it can override the
/// batch-level parameter defaults for this record only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(default)]
    pub json: Map<String, Value>,
}

/// One emitted output record: the full response object, or one element of
/// an array response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    pub json: Value,
}

impl OutputRecord {
    pub fn new(json: Value) -> Self {
        Self { json }
    }
}
