//! Drives resolution and dispatch across a batch of input records.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use super::http::{HttpClient, RequestSpec};
use super::params::ParameterSet;
use super::{endpoint, schema, ResourceSelection};
use crate::batch::Batch;
use crate::credential::Credential;
use crate::error::Result;
use crate::model::record::{InputRecord, OutputRecord};

/// Run the batch strictly in order: record i+1 starts only after record
/// i's call resolves. The first error of any kind aborts the whole batch;
/// there are no partial results and no per-record retry. An array response
/// fans out into one output record per element; anything else emits one
/// record wrapping the whole response.
pub async fn run_batch(
    client: &dyn HttpClient,
    credential: &Credential,
    batch: &Batch,
) -> Result<Vec<OutputRecord>> {
    // A batch always executes at least once.
    let fallback = [InputRecord::default()];
    let items: &[InputRecord] = if batch.items.is_empty() {
        &fallback
    } else {
        &batch.items
    };

    let mut output = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let spec = build_request(credential, batch, item)?;
        debug!(index, method = %spec.method, uri = %spec.uri, "dispatching");
        let response = client.dispatch(&spec).await?;
        match response {
            Value::Array(elements) => {
                output.extend(elements.into_iter().map(OutputRecord::new));
            }
            other => output.push(OutputRecord::new(other)),
        }
    }
    Ok(output)
}

fn build_request(
    credential: &Credential,
    batch: &Batch,
    item: &InputRecord,
) -> Result<RequestSpec> {
    if let Some(raw) = &batch.request {
        return raw.assemble(credential);
    }

    let selection = ResourceSelection::parse(&batch.resource, &batch.operation)?;
    let params = ParameterSet::new(&batch.parameters, &item.json);
    schema::validate(selection, &params)?;
    let endpoint = endpoint::resolve(selection, &params)?;
    Ok(RequestSpec {
        method: Method::GET,
        uri: format!("{}{}", credential.base_url(), endpoint),
        headers: credential.headers(),
        body: None,
    })
}
