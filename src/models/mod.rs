//! Domain models for Azure load balancer configuration.
//!
//! This module contains the object graph edited before it is submitted to Azure:
//! - [`LoadBalancer`] - the parent resource owning every child collection
//! - [`LoadBalancingRule`] - a rule mapping a frontend port to a backend pool
//! - [`ResourceReference`] - a back-reference to a sibling sub-resource
//! - [`FrontendIpConfiguration`], [`BackendAddressPool`] and [`Probe`] - rule siblings

mod child;
mod load_balancer;
mod resource_reference;
mod rule;
mod sibling;

// Re-export public types
pub use child::{names_match, position_of, ChildResource};
pub use load_balancer::LoadBalancer;
pub use resource_reference::ResourceReference;
pub use rule::{LoadBalancingRule, TransportProtocol};
pub use sibling::{BackendAddressPool, FrontendIpConfiguration, Probe, ProbeProtocol};
