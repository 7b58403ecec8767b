//! Sibling sub-resources referenced by load balancing rules.

use super::ChildResource;
use crate::azure::{BACKEND_ADDRESS_POOLS, FRONTEND_IP_CONFIGURATIONS, PROBES};
use serde::{Deserialize, Serialize};

/// Frontend IP configuration of a load balancer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FrontendIpConfiguration {
    pub id: String,
    pub name: String,
}

/// Backend address pool of a load balancer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BackendAddressPool {
    pub id: String,
    pub name: String,
}

/// Protocol used by a health probe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeProtocol {
    Tcp,
    Http,
}

/// Health probe of a load balancer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub id: String,
    pub name: String,
    pub protocol: ProbeProtocol,
    pub port: u16,
    pub interval_in_seconds: Option<u32>,
    pub number_of_probes: Option<u32>,
    /// Only meaningful for HTTP probes.
    pub request_path: Option<String>,
}

impl ChildResource for FrontendIpConfiguration {
    const KIND: &'static str = "FrontendIpConfiguration";
    const CHILD_TYPE: &'static str = FRONTEND_IP_CONFIGURATIONS;

    fn name(&self) -> &str {
        &self.name
    }
}

impl ChildResource for BackendAddressPool {
    const KIND: &'static str = "BackendAddressPool";
    const CHILD_TYPE: &'static str = BACKEND_ADDRESS_POOLS;

    fn name(&self) -> &str {
        &self.name
    }
}

impl ChildResource for Probe {
    const KIND: &'static str = "Probe";
    const CHILD_TYPE: &'static str = PROBES;

    fn name(&self) -> &str {
        &self.name
    }
}
