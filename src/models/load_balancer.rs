//! Azure load balancer data model.

use super::{
    position_of, BackendAddressPool, ChildResource, FrontendIpConfiguration, LoadBalancingRule,
    Probe,
};
use crate::azure::{child_resource_id, load_balancer_id};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an Azure load balancer draft with all of its child collections.
///
/// Collections keep insertion order; that order is what gets submitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancer {
    /// Name of the load balancer.
    pub name: String,
    /// Resource group containing the load balancer.
    pub resource_group_name: String,
    /// Azure subscription ID, taken opaquely from the caller's context.
    pub subscription_id: String,
    /// Azure region location.
    pub location: Option<String>,
    #[serde(default)]
    pub frontend_ip_configurations: Vec<FrontendIpConfiguration>,
    #[serde(default)]
    pub backend_address_pools: Vec<BackendAddressPool>,
    #[serde(default)]
    pub probes: Vec<Probe>,
    #[serde(default)]
    pub load_balancing_rules: Vec<LoadBalancingRule>,
}

impl LoadBalancer {
    /// Create an empty load balancer draft.
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        name: impl Into<String>,
    ) -> LoadBalancer {
        LoadBalancer {
            name: name.into(),
            resource_group_name: resource_group_name.into(),
            subscription_id: subscription_id.into(),
            location: None,
            frontend_ip_configurations: vec![],
            backend_address_pools: vec![],
            probes: vec![],
            load_balancing_rules: vec![],
        }
    }

    /// Canonical resource id of the load balancer itself.
    pub fn id(&self) -> String {
        load_balancer_id(&self.subscription_id, &self.resource_group_name, &self.name)
    }

    /// Canonical resource id for a child of kind `T` named `child_name`.
    pub fn child_id<T: ChildResource>(&self, child_name: &str) -> String {
        child_resource_id(
            &self.subscription_id,
            &self.resource_group_name,
            &self.name,
            T::CHILD_TYPE,
            child_name,
        )
    }

    /// Find a rule by name (case-insensitive).
    pub fn find_rule(&self, name: &str) -> Option<&LoadBalancingRule> {
        position_of(&self.load_balancing_rules, name).map(|i| &self.load_balancing_rules[i])
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.load_balancing_rules
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }
}

impl fmt::Display for LoadBalancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({} rules, {} probes, {} pools, {} frontends)",
            self.name,
            self.resource_group_name,
            self.load_balancing_rules.len(),
            self.probes.len(),
            self.backend_address_pools.len(),
            self.frontend_ip_configurations.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_load_balancer_is_empty() {
        let lb = LoadBalancer::new("sub1", "rg1", "lb1");
        assert!(lb.load_balancing_rules.is_empty());
        assert_eq!(
            lb.id(),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/loadBalancers/lb1"
        );
        assert_eq!(lb.to_string(), "lb1 [rg1] (0 rules, 0 probes, 0 pools, 0 frontends)");
    }

    #[test]
    fn test_child_id_uses_child_type() {
        let lb = LoadBalancer::new("sub1", "rg1", "lb1");
        assert_eq!(
            lb.child_id::<Probe>("http"),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/loadBalancers/lb1/probes/http"
        );
        assert_eq!(
            lb.child_id::<LoadBalancingRule>("web"),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/loadBalancers/lb1/loadBalancingRules/web"
        );
    }

    #[test]
    fn test_deserialize_without_collections() {
        let json = r#"{"name":"lb1","resource_group_name":"rg1","subscription_id":"sub1"}"#;
        let lb: LoadBalancer = serde_json::from_str(json).unwrap();
        assert_eq!(lb, LoadBalancer::new("sub1", "rg1", "lb1"));
    }
}
