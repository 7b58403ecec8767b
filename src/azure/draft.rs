//! Local draft files for load balancer configurations.
//!
//! A draft keeps the edited object graph on disk between command invocations,
//! until it is submitted to Azure by a separate step.

use crate::error::{LbConfigError, LbConfigResult};
use crate::models::LoadBalancer;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Default draft file name of a load balancer, one file per resource group and name.
pub fn default_draft_file(resource_group: &str, lb_name: &str) -> String {
    format!("lb_draft_{resource_group}_{lb_name}.json")
}

/// Parse a JSON file, reporting the JSON path of any mismatch.
pub fn read_json<T: DeserializeOwned>(file: &str) -> LbConfigResult<T> {
    let json = std::fs::read_to_string(file)
        .map_err(|e| LbConfigError::Draft(format!("Error reading {file}: {e}")))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("Failed to parse {file}");
        LbConfigError::Draft(format!(
            "Error parsing {file}: path={} error={}",
            e.path(),
            e
        ))
    })
}

/// Read a load balancer draft.
pub fn read_draft(file: &str) -> LbConfigResult<LoadBalancer> {
    log::info!("Reading draft file: {file}");
    read_json(file)
}

/// Write a load balancer draft as pretty JSON.
pub fn write_draft(file: &str, lb: &LoadBalancer) -> LbConfigResult<()> {
    let json = serde_json::to_string_pretty(lb)?;
    log::info!(
        "Writing draft file: {file} ({} rules)",
        lb.load_balancing_rules.len()
    );
    std::fs::write(file, json)
        .map_err(|e| LbConfigError::Draft(format!("Error writing draft file {file}: {e}")))
}

/// Read the draft at `file`, or build a new one with `create` if it doesn't exist yet.
pub fn load_draft<F>(file: &str, create: F) -> LbConfigResult<LoadBalancer>
where
    F: FnOnce() -> LbConfigResult<LoadBalancer>,
{
    if Path::new(file).exists() {
        read_draft(file)
    } else {
        log::warn!("Draft file not found: {file}, starting a new draft");
        create()
    }
}
