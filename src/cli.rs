use std::io::Read;

use anyhow::{Context, Result};

use crate::batch::Batch;
use crate::config;
use crate::connector::execute::run_batch;
use crate::connector::http::ReqwestClient;
use crate::connector::schema;
use crate::credential::Credential;

/// Run a batch read from a file argument or stdin and print one output
/// record per line.
pub async fn handle_run(args: &[String]) -> Result<()> {
    let text = read_batch_input(args.first().map(String::as_str))?;
    let batch = parse_batch(&text)?;
    let credential = load_credential()?;
    let client = ReqwestClient::new();
    let output = run_batch(&client, &credential, &batch).await?;
    for record in &output {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}

pub fn handle_describe() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&schema::descriptor())?);
    Ok(())
}

/// Issue the credential self-test call against the configured instance.
pub async fn handle_test() -> Result<()> {
    let credential = load_credential()?;
    let client = ReqwestClient::new();
    credential
        .verify(&client)
        .await
        .context("Credential test failed")?;
    println!("Credential OK: {}", credential.base_url());
    Ok(())
}

fn load_credential() -> Result<Credential> {
    let config = config::load_config()?;
    let youtrack = config
        .youtrack
        .context("No [youtrack] section in ~/.ytconnect/config.toml")?;
    let base_url = youtrack.base_url()?;
    Ok(Credential::new(base_url, youtrack.token))
}

fn read_batch_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch from {path}")),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read batch from stdin")?;
            Ok(text)
        }
    }
}

pub fn parse_batch(text: &str) -> Result<Batch> {
    serde_json::from_str(text).context("Failed to parse batch JSON")
}

pub fn print_help() {
    println!("ytconnect — run YouTrack API actions over a batch of records\n");
    println!("USAGE:");
    println!("  ytconnect run [batch.json]  Execute a batch (reads stdin when no file is given)");
    println!("  ytconnect describe          Print the parameter schema as JSON");
    println!("  ytconnect test              Check the configured credentials");
    println!();
    println!("CONFIG (~/.ytconnect/config.toml):");
    println!("  [youtrack]");
    println!("  url = \"https://example.youtrack.cloud\"   # or: domain = \"example\"");
    println!("  token = \"perm:...\"");
    println!();
    println!("EXAMPLES:");
    println!("  echo '{{\"resource\": \"agile\"}}' | ytconnect run");
    println!("  ytconnect run batch.json");
}
