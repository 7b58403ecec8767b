//! Frontend, backend pool and probe configuration.
//!
//! Same insert pattern as rules: unique name, derived id, appended at the end.

use crate::error::{LbConfigError, LbConfigResult};
use crate::models::{
    position_of, BackendAddressPool, ChildResource, FrontendIpConfiguration, LoadBalancer, Probe,
    ProbeProtocol,
};
use serde::{Deserialize, Serialize};

/// Desired configuration of a health probe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub name: String,
    pub protocol: ProbeProtocol,
    pub port: u16,
    #[serde(default)]
    pub interval_in_seconds: Option<i32>,
    #[serde(default)]
    pub number_of_probes: Option<i32>,
    #[serde(default)]
    pub request_path: Option<String>,
}

/// Fail with [`LbConfigError::DuplicateName`] if `name` is taken in `children`.
pub(crate) fn ensure_unique<T: ChildResource>(children: &[T], name: &str) -> LbConfigResult<()> {
    match position_of(children, name) {
        Some(_) => Err(LbConfigError::DuplicateName {
            kind: T::KIND,
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

/// Keep a numeric setting only when it is strictly positive.
pub(crate) fn positive(value: Option<i32>) -> Option<u32> {
    value.filter(|v| *v > 0).map(|v| v as u32)
}

/// Keep a text setting only when it is non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Add a frontend IP configuration, returning its id.
pub fn add_frontend_ip_config(lb: &mut LoadBalancer, name: &str) -> LbConfigResult<String> {
    ensure_unique(&lb.frontend_ip_configurations, name)?;
    let id = lb.child_id::<FrontendIpConfiguration>(name);

    lb.frontend_ip_configurations.push(FrontendIpConfiguration {
        id: id.clone(),
        name: name.to_string(),
    });
    Ok(id)
}

/// Add a backend address pool, returning its id.
pub fn add_backend_address_pool_config(
    lb: &mut LoadBalancer,
    name: &str,
) -> LbConfigResult<String> {
    ensure_unique(&lb.backend_address_pools, name)?;
    let id = lb.child_id::<BackendAddressPool>(name);

    lb.backend_address_pools.push(BackendAddressPool {
        id: id.clone(),
        name: name.to_string(),
    });
    Ok(id)
}

/// Add a health probe, returning its id.
pub fn add_probe_config(lb: &mut LoadBalancer, request: &ProbeRequest) -> LbConfigResult<String> {
    ensure_unique(&lb.probes, &request.name)?;
    let id = lb.child_id::<Probe>(&request.name);

    lb.probes.push(Probe {
        id: id.clone(),
        name: request.name.clone(),
        protocol: request.protocol,
        port: request.port,
        interval_in_seconds: positive(request.interval_in_seconds),
        number_of_probes: positive(request.number_of_probes),
        request_path: non_empty(request.request_path.as_deref()),
    });
    Ok(id)
}
