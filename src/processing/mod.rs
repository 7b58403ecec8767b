//! Load balancer configuration edits.
//!
//! This module contains the logic that mutates a load balancer draft:
//! - [`rule`] - Adding, replacing and removing load balancing rules
//! - [`children`] - Adding frontends, backend pools and probes

mod children;
mod rule;

// Re-export public functions
pub use children::{
    add_backend_address_pool_config, add_frontend_ip_config, add_probe_config, ProbeRequest,
};
pub use rule::{
    add_rule_config, get_rule_config, remove_rule_config, set_rule_config, FrontendIpPolicy,
    RuleRequest,
};
