//! Azure Load Balancer Config
//!
//! Assembles an Azure load balancer configuration as a local object graph before it
//! is submitted to Azure.
//!
//! # Modules
//! - [`models`] - Load balancer, rule and sibling data structures
//! - [`azure`] - Resource ids, subscription context and local drafts
//! - [`processing`] - Rule and sibling insertion with validation
//! - [`output`] - Terminal and CSV output
//! - [`config`] - Settings from the environment

pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use azure::{load_draft, read_json, AzureContext};
use config::Settings;
use error::{LbConfigError, LbConfigResult};
use models::{names_match, ChildResource, LoadBalancer, LoadBalancingRule};
use processing::{add_rule_config, RuleRequest};

/// Load the configured draft, starting a new one if the file doesn't exist.
///
/// A draft on disk for another load balancer is rejected with
/// [`LbConfigError::DraftMismatch`]. `context` supplies the subscription when the
/// settings don't carry one.
pub fn get_draft<F>(settings: &Settings, context: F) -> LbConfigResult<LoadBalancer>
where
    F: Fn() -> LbConfigResult<AzureContext>,
{
    let lb = load_draft(&settings.draft_file()?, || settings.new_load_balancer(&context))?;
    let context = context().ok();
    settings.check_draft(&lb, context.as_ref().map(AzureContext::subscription_id))?;
    check_for_duplicate_rules(&lb)?;
    Ok(lb)
}

/// Return an error if two rules share a name (case-insensitive).
pub fn check_for_duplicate_rules(lb: &LoadBalancer) -> LbConfigResult<()> {
    for (i, rule) in lb.load_balancing_rules.iter().enumerate() {
        if lb.load_balancing_rules[..i]
            .iter()
            .any(|earlier| names_match(&earlier.name, &rule.name))
        {
            return Err(LbConfigError::DuplicateName {
                kind: LoadBalancingRule::KIND,
                name: rule.name.clone(),
            });
        }
    }
    Ok(())
}

/// Read a rule request file and add the rule to `lb`.
pub fn apply_rule_request<'a>(
    lb: &'a mut LoadBalancer,
    request_file: &str,
    settings: &Settings,
) -> LbConfigResult<&'a mut LoadBalancer> {
    let request: RuleRequest = read_json(request_file)?;
    log::info!(
        "Adding rule '{}' {}/{} -> {} to {}",
        request.name,
        request.protocol,
        request.frontend_port,
        request.backend_port,
        lb.name
    );
    add_rule_config(lb, &request, settings.frontend_ip_policy).map_err(|e| {
        log::warn!("Rule '{}' rejected: {e}", request.name);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::{read_draft, write_draft};
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned()).unwrap()
    }

    fn temp_draft(name: &str, lb: &LoadBalancer) -> String {
        let file = std::env::temp_dir().join(name);
        let file = file.to_string_lossy().to_string();
        write_draft(&file, lb).unwrap();
        file
    }

    #[test]
    fn test_get_draft_rejects_other_load_balancer() {
        let file = temp_draft(
            "azure_lb_config_other_lb.json",
            &LoadBalancer::new("subA", "rgA", "lbA"),
        );
        let s = settings(&[
            (
                config::ENV_LB_RESOURCE_ID,
                "/subscriptions/subB/resourceGroups/rgB/providers/Microsoft.Network/loadBalancers/lbB",
            ),
            (config::ENV_DRAFT_FILE, &file),
        ]);

        let err = get_draft(&s, || Ok(AzureContext::new("subB"))).unwrap_err();
        std::fs::remove_file(&file).ok();
        assert!(matches!(err, LbConfigError::DraftMismatch { .. }), "{err}");
    }

    #[test]
    fn test_get_draft_rejects_other_subscription() {
        let file = temp_draft(
            "azure_lb_config_other_sub.json",
            &LoadBalancer::new("subA", "rg1", "lb1"),
        );
        let s = settings(&[
            (config::ENV_RESOURCE_GROUP, "rg1"),
            (config::ENV_LB_NAME, "lb1"),
            (config::ENV_DRAFT_FILE, &file),
        ]);

        let err = get_draft(&s, || Ok(AzureContext::new("subB"))).unwrap_err();
        let ok = get_draft(&s, || Ok(AzureContext::new("subA")));
        std::fs::remove_file(&file).ok();
        assert!(matches!(err, LbConfigError::DraftMismatch { .. }));
        assert_eq!(ok.unwrap().name, "lb1");
    }

    #[test]
    fn test_get_draft_matching_file() {
        let s = settings(&[
            (
                config::ENV_LB_RESOURCE_ID,
                "/subscriptions/c4855b85-e4fb-4ae6-9db6-34dc74d21cc4/resourceGroups/DR-LB-RG/providers/Microsoft.Network/loadBalancers/lb-web",
            ),
            (config::ENV_DRAFT_FILE, "src/tests/test_data/lb_draft_01.json"),
        ]);
        // The subscription of the resource id wins over the context.
        let lb = get_draft(&s, || Ok(AzureContext::new("other-sub"))).unwrap();
        assert_eq!(lb.load_balancing_rules.len(), 1);
    }

    #[test]
    fn test_get_draft_new_when_missing() {
        let s = settings(&[
            (config::ENV_RESOURCE_GROUP, "rg1"),
            (config::ENV_LB_NAME, "lb1"),
            (config::ENV_DRAFT_FILE, "src/tests/test_data/does_not_exist.json"),
        ]);
        let lb = get_draft(&s, || Ok(AzureContext::new("sub1"))).unwrap();
        assert_eq!(lb, LoadBalancer::new("sub1", "rg1", "lb1"));
    }

    #[test]
    fn test_check_for_duplicate_rules_ok() {
        let lb = read_draft("src/tests/test_data/lb_draft_01.json").unwrap();
        assert!(check_for_duplicate_rules(&lb).is_ok());
    }

    #[test]
    fn test_check_for_duplicate_rules_found() {
        let mut lb = read_draft("src/tests/test_data/lb_draft_01.json").unwrap();
        let mut copy = lb.load_balancing_rules[0].clone();
        copy.name = "WEB".to_string();
        lb.load_balancing_rules.push(copy);
        assert_eq!(
            check_for_duplicate_rules(&lb).unwrap_err(),
            LbConfigError::DuplicateName {
                kind: "LoadBalancingRule",
                name: "WEB".to_string()
            }
        );
    }
}
