//! Load balancing rule configuration.
//!
//! Adds, reads, replaces and removes rules on a load balancer draft. Every check runs
//! before the draft is touched: on error the rule collection is left exactly as it was.

use super::children::{ensure_unique, non_empty, positive};
use crate::error::{LbConfigError, LbConfigResult};
use crate::models::{position_of, ChildResource, LoadBalancer, LoadBalancingRule, TransportProtocol};
use serde::{Deserialize, Serialize};

/// How to treat a rule request without frontend IP configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontendIpPolicy {
    /// Accept the rule with zero frontend IP configurations.
    #[default]
    AllowEmpty,
    /// Reject the rule with [`LbConfigError::MissingFrontendIpConfiguration`].
    RequireAtLeastOne,
}

/// Desired configuration of a load balancing rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RuleRequest {
    pub name: String,
    pub protocol: TransportProtocol,
    pub frontend_port: u16,
    pub backend_port: u16,
    /// Applied only when strictly positive.
    #[serde(default)]
    pub idle_timeout_in_minutes: Option<i32>,
    /// Applied only when non-empty.
    #[serde(default)]
    pub load_distribution: Option<String>,
    #[serde(default)]
    pub enable_floating_ip: bool,
    pub backend_address_pool_id: String,
    /// Mandatory, a rule without a probe is rejected.
    #[serde(default)]
    pub probe_id: Option<String>,
    #[serde(default)]
    pub frontend_ip_configuration_ids: Vec<String>,
}

/// Add a new load balancing rule to `lb`.
///
/// # Errors
/// * [`LbConfigError::DuplicateName`] - a rule with the same name (any case) exists
/// * [`LbConfigError::MissingRequiredReference`] - no probe id was supplied
/// * [`LbConfigError::MissingFrontendIpConfiguration`] - no frontend ids under
///   [`FrontendIpPolicy::RequireAtLeastOne`]
///
/// # Returns
/// The same load balancer, with the new rule appended after all existing rules.
pub fn add_rule_config<'a>(
    lb: &'a mut LoadBalancer,
    request: &RuleRequest,
    policy: FrontendIpPolicy,
) -> LbConfigResult<&'a mut LoadBalancer> {
    ensure_unique(&lb.load_balancing_rules, &request.name)?;
    let rule = build_rule(lb, request, policy)?;

    lb.load_balancing_rules.push(rule);
    Ok(lb)
}

/// Find a rule by name (case-insensitive).
pub fn get_rule_config<'a>(lb: &'a LoadBalancer, name: &str) -> LbConfigResult<&'a LoadBalancingRule> {
    lb.find_rule(name).ok_or_else(|| LbConfigError::NotFound {
        kind: LoadBalancingRule::KIND,
        name: name.to_string(),
    })
}

/// Replace the rule named `request.name`, keeping its position in the collection.
pub fn set_rule_config<'a>(
    lb: &'a mut LoadBalancer,
    request: &RuleRequest,
    policy: FrontendIpPolicy,
) -> LbConfigResult<&'a mut LoadBalancer> {
    let pos = position_of(&lb.load_balancing_rules, &request.name).ok_or_else(|| {
        LbConfigError::NotFound {
            kind: LoadBalancingRule::KIND,
            name: request.name.clone(),
        }
    })?;
    let rule = build_rule(lb, request, policy)?;

    lb.load_balancing_rules[pos] = rule;
    Ok(lb)
}

/// Remove the rule named `name`. Returns false when there was no such rule.
pub fn remove_rule_config(lb: &mut LoadBalancer, name: &str) -> bool {
    match position_of(&lb.load_balancing_rules, name) {
        Some(pos) => {
            lb.load_balancing_rules.remove(pos);
            true
        }
        None => false,
    }
}

/// Validate the request and build the fully populated rule.
fn build_rule(
    lb: &LoadBalancer,
    request: &RuleRequest,
    policy: FrontendIpPolicy,
) -> LbConfigResult<LoadBalancingRule> {
    let probe_id = request
        .probe_id
        .as_ref()
        .ok_or(LbConfigError::MissingRequiredReference {
            kind: LoadBalancingRule::KIND,
            reference: "Probe",
        })?;

    if policy == FrontendIpPolicy::RequireAtLeastOne
        && request.frontend_ip_configuration_ids.is_empty()
    {
        return Err(LbConfigError::MissingFrontendIpConfiguration {
            rule: request.name.clone(),
        });
    }

    Ok(LoadBalancingRule {
        id: lb.child_id::<LoadBalancingRule>(&request.name),
        name: request.name.clone(),
        protocol: request.protocol,
        frontend_port: request.frontend_port,
        backend_port: request.backend_port,
        idle_timeout_in_minutes: positive(request.idle_timeout_in_minutes),
        load_distribution: non_empty(request.load_distribution.as_deref()),
        enable_floating_ip: Some(request.enable_floating_ip),
        backend_address_pool: request.backend_address_pool_id.as_str().into(),
        probe: probe_id.as_str().into(),
        frontend_ip_configurations: request
            .frontend_ip_configuration_ids
            .iter()
            .map(|id| id.as_str().into())
            .collect(),
    })
}
