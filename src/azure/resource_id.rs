//! Azure resource id composition and parsing.
//!
//! Ids follow the Azure Resource Manager template:
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/{namespace}/{type}/{name}[/{child_type}/{child_name}]`

use crate::error::{LbConfigError, LbConfigResult};
use lazy_static::lazy_static;
use regex::Regex;

/// Provider namespace of all network resources.
pub const PROVIDER_NAMESPACE: &str = "Microsoft.Network";
/// Resource type of the parent load balancer.
pub const LOAD_BALANCERS: &str = "loadBalancers";

pub const LOAD_BALANCING_RULES: &str = "loadBalancingRules";
pub const PROBES: &str = "probes";
pub const BACKEND_ADDRESS_POOLS: &str = "backendAddressPools";
pub const FRONTEND_IP_CONFIGURATIONS: &str = "frontendIPConfigurations";

/// Compose the canonical id of a child resource of a load balancer.
///
/// Components are not validated; a malformed component yields a malformed id that
/// Azure rejects on submission.
///
/// # Examples
/// ```
/// use azure_lb_config::azure::child_resource_id;
/// assert_eq!(
///     child_resource_id("sub1", "rg1", "lb1", "loadBalancingRules", "web"),
///     "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/loadBalancers/lb1/loadBalancingRules/web"
/// );
/// ```
pub fn child_resource_id(
    subscription_id: &str,
    resource_group: &str,
    parent_name: &str,
    child_type: &str,
    child_name: &str,
) -> String {
    format!(
        "{parent}/{child_type}/{child_name}",
        parent = load_balancer_id(subscription_id, resource_group, parent_name)
    )
}

/// Compose the canonical id of a load balancer.
pub fn load_balancer_id(subscription_id: &str, resource_group: &str, name: &str) -> String {
    format!(
        "/subscriptions/{subscription_id}/resourceGroups/{resource_group}/providers/{PROVIDER_NAMESPACE}/{LOAD_BALANCERS}/{name}"
    )
}

/// Trailing name segment of a resource id, e.g. the probe name of a probe id.
pub fn resource_name(id: &str) -> &str {
    id.rsplit('/').find(|s| !s.is_empty()).unwrap_or(id)
}

lazy_static! {
    static ref RE_RESOURCE_ID: Regex = Regex::new(
        r"(?i)^/subscriptions/([^/]+)/resourceGroups/([^/]+)/providers/([^/]+)/([^/]+)/([^/]+)(?:/([^/]+)/([^/]+))?/?$"
    )
    .expect("Invalid Regex?");
}

/// Components of a parsed Azure resource id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub subscription_id: String,
    pub resource_group: String,
    pub provider_namespace: String,
    pub resource_type: String,
    pub resource_name: String,
    /// Child segments, present for sub-resources like rules and probes.
    pub child: Option<(String, String)>,
}

/// Split a resource id back into its components.
pub fn parse_resource_id(id: &str) -> LbConfigResult<ResourceId> {
    let caps = RE_RESOURCE_ID
        .captures(id.trim())
        .ok_or_else(|| LbConfigError::InvalidResourceId(id.to_string()))?;
    let part = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

    Ok(ResourceId {
        subscription_id: part(1).unwrap_or_default(),
        resource_group: part(2).unwrap_or_default(),
        provider_namespace: part(3).unwrap_or_default(),
        resource_type: part(4).unwrap_or_default(),
        resource_name: part(5).unwrap_or_default(),
        child: part(6).zip(part(7)),
    })
}
