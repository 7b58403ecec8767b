//! Azure coordinates and local draft handling.
//!
//! This module handles everything tied to Azure's resource namespace:
//! - [`resource_id`] - Composing and parsing canonical resource ids
//! - [`context`] - Subscription context for new drafts
//! - [`draft`] - Local JSON drafts of load balancer configurations

mod context;
mod draft;
mod resource_id;

// Re-export public types and functions
pub use context::{AzureContext, ENV_SUBSCRIPTION_ID};
pub use draft::{default_draft_file, load_draft, read_draft, read_json, write_draft};
pub use resource_id::{
    child_resource_id, load_balancer_id, parse_resource_id, resource_name, ResourceId,
    BACKEND_ADDRESS_POOLS, FRONTEND_IP_CONFIGURATIONS, LOAD_BALANCERS, LOAD_BALANCING_RULES,
    PROBES, PROVIDER_NAMESPACE,
};
