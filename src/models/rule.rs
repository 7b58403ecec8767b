//! Load balancing rule data model.

use super::{ChildResource, ResourceReference};
use crate::azure::LOAD_BALANCING_RULES;
use crate::error::LbConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport protocol a rule listens on.
///
/// Parsed case-insensitively, from files as well as strings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum TransportProtocol {
    Tcp,
    Udp,
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportProtocol::Tcp => write!(f, "Tcp"),
            TransportProtocol::Udp => write!(f, "Udp"),
        }
    }
}

impl FromStr for TransportProtocol {
    type Err = LbConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(TransportProtocol::Tcp),
            "udp" => Ok(TransportProtocol::Udp),
            _ => Err(LbConfigError::UnknownProtocol(s.to_string())),
        }
    }
}

impl TryFrom<String> for TransportProtocol {
    type Error = LbConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Represents a load balancing rule inside a load balancer draft.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancingRule {
    /// Canonical resource id, always derived from the parent and the rule name.
    pub id: String,
    /// Rule name, unique within the load balancer (case-insensitive).
    pub name: String,
    pub protocol: TransportProtocol,
    pub frontend_port: u16,
    pub backend_port: u16,
    /// Idle timeout, None lets Azure apply its default.
    pub idle_timeout_in_minutes: Option<u32>,
    /// Load distribution mode, e.g. `SourceIP`. None lets Azure apply its default.
    pub load_distribution: Option<String>,
    /// Always `Some` for rules added through the inserter.
    pub enable_floating_ip: Option<bool>,
    pub backend_address_pool: ResourceReference,
    pub probe: ResourceReference,
    /// Frontend IP configurations in the order they were supplied.
    #[serde(default)]
    pub frontend_ip_configurations: Vec<ResourceReference>,
}

impl ChildResource for LoadBalancingRule {
    const KIND: &'static str = "LoadBalancingRule";
    const CHILD_TYPE: &'static str = LOAD_BALANCING_RULES;

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for LoadBalancingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{} -> {} (probe {})",
            self.name,
            self.protocol,
            self.frontend_port,
            self.backend_port,
            self.probe.name()
        )
    }
}
