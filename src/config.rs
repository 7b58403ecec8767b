//! Settings and constants for the command surface.
//!
//! Values come from the environment, `.env` is loaded by `main()` beforehand.

use crate::azure::{
    default_draft_file, load_balancer_id, parse_resource_id, AzureContext, LOAD_BALANCERS,
};
use crate::error::{LbConfigError, LbConfigResult};
use crate::models::{names_match, LoadBalancer};
use crate::processing::FrontendIpPolicy;

/// log4rs configuration file read by `main()`.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const ENV_RESOURCE_GROUP: &str = "LB_RESOURCE_GROUP";
pub const ENV_LB_NAME: &str = "LB_NAME";
pub const ENV_LB_RESOURCE_ID: &str = "LB_RESOURCE_ID";
pub const ENV_LOCATION: &str = "LB_LOCATION";
pub const ENV_DRAFT_FILE: &str = "LB_DRAFT_FILE";
pub const ENV_RULE_REQUEST_FILE: &str = "LB_RULE_REQUEST_FILE";
pub const ENV_REQUIRE_FRONTEND_IP: &str = "LB_REQUIRE_FRONTEND_IP";

/// Coordinates of the load balancer a command works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LbTarget {
    /// Only known when configured through a resource id.
    pub subscription_id: Option<String>,
    pub resource_group: String,
    pub name: String,
}

/// Settings for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub resource_group: Option<String>,
    pub lb_name: Option<String>,
    /// Full id of an existing load balancer, alternative to group + name.
    pub lb_resource_id: Option<String>,
    pub location: Option<String>,
    pub draft_file: Option<String>,
    pub rule_request_file: Option<String>,
    pub frontend_ip_policy: FrontendIpPolicy,
}

impl Settings {
    pub fn from_env() -> LbConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings through `lookup`, which maps a variable name to its value.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> LbConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let frontend_ip_policy = match get(ENV_REQUIRE_FRONTEND_IP) {
            None => FrontendIpPolicy::default(),
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => FrontendIpPolicy::RequireAtLeastOne,
                "0" | "false" | "no" => FrontendIpPolicy::AllowEmpty,
                _ => {
                    return Err(LbConfigError::Config(format!(
                        "{ENV_REQUIRE_FRONTEND_IP} must be true or false, got '{v}'"
                    )))
                }
            },
        };

        Ok(Settings {
            resource_group: get(ENV_RESOURCE_GROUP),
            lb_name: get(ENV_LB_NAME),
            lb_resource_id: get(ENV_LB_RESOURCE_ID),
            location: get(ENV_LOCATION),
            draft_file: get(ENV_DRAFT_FILE),
            rule_request_file: get(ENV_RULE_REQUEST_FILE),
            frontend_ip_policy,
        })
    }

    /// Resolve the target load balancer.
    ///
    /// A configured resource id wins over group + name. Returns None when neither is set.
    pub fn target(&self) -> LbConfigResult<Option<LbTarget>> {
        match (&self.lb_resource_id, &self.resource_group, &self.lb_name) {
            (Some(id), _, _) => {
                let parsed = parse_resource_id(id)?;
                if !parsed.resource_type.eq_ignore_ascii_case(LOAD_BALANCERS)
                    || parsed.child.is_some()
                {
                    return Err(LbConfigError::InvalidResourceId(format!(
                        "{id} is not a load balancer id"
                    )));
                }
                Ok(Some(LbTarget {
                    subscription_id: Some(parsed.subscription_id),
                    resource_group: parsed.resource_group,
                    name: parsed.resource_name,
                }))
            }
            (None, Some(rg), Some(name)) => Ok(Some(LbTarget {
                subscription_id: None,
                resource_group: rg.clone(),
                name: name.clone(),
            })),
            _ => Ok(None),
        }
    }

    fn require_target(&self) -> LbConfigResult<LbTarget> {
        self.target()?.ok_or_else(|| {
            LbConfigError::Config(format!(
                "set {ENV_LB_RESOURCE_ID}, or {ENV_RESOURCE_GROUP} and {ENV_LB_NAME}"
            ))
        })
    }

    /// Draft file to use, falling back to the default name of the target load balancer.
    pub fn draft_file(&self) -> LbConfigResult<String> {
        match &self.draft_file {
            Some(file) => Ok(file.clone()),
            None => {
                let target = self.require_target()?;
                Ok(default_draft_file(&target.resource_group, &target.name))
            }
        }
    }

    /// Build an empty load balancer draft for the target.
    ///
    /// The subscription comes from the resource id when one is configured,
    /// otherwise from `context`.
    pub fn new_load_balancer<F>(&self, context: F) -> LbConfigResult<LoadBalancer>
    where
        F: FnOnce() -> LbConfigResult<AzureContext>,
    {
        let target = self.require_target()?;
        let subscription_id = match target.subscription_id {
            Some(id) => id,
            None => context()?.subscription_id().to_string(),
        };
        let mut lb = LoadBalancer::new(subscription_id, target.resource_group, target.name);
        lb.location = self.location.clone();
        Ok(lb)
    }

    /// Fail with [`LbConfigError::DraftMismatch`] if `lb` is not the target load balancer.
    ///
    /// `subscription_id` is compared when the target doesn't carry its own. Without a
    /// configured target any draft is accepted.
    pub fn check_draft(
        &self,
        lb: &LoadBalancer,
        subscription_id: Option<&str>,
    ) -> LbConfigResult<()> {
        let Some(target) = self.target()? else {
            return Ok(());
        };
        let subscription_id = target.subscription_id.as_deref().or(subscription_id);

        let same_subscription =
            subscription_id.map_or(true, |id| id.eq_ignore_ascii_case(&lb.subscription_id));
        if same_subscription
            && names_match(&target.resource_group, &lb.resource_group_name)
            && names_match(&target.name, &lb.name)
        {
            return Ok(());
        }
        Err(LbConfigError::DraftMismatch {
            expected: load_balancer_id(
                subscription_id.unwrap_or("*"),
                &target.resource_group,
                &target.name,
            ),
            found: lb.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const LB_B_ID: &str =
        "/subscriptions/subB/resourceGroups/rgB/providers/Microsoft.Network/loadBalancers/lbB";

    fn settings(vars: &[(&str, &str)]) -> LbConfigResult<Settings> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    fn no_context() -> LbConfigResult<AzureContext> {
        panic!("context should not be needed")
    }

    #[test]
    fn test_settings_defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.frontend_ip_policy, FrontendIpPolicy::AllowEmpty);
        assert_eq!(s.target().unwrap(), None);
        assert!(matches!(s.draft_file(), Err(LbConfigError::Config(_))));
    }

    #[test]
    fn test_settings_frontend_policy() {
        let s = settings(&[(ENV_REQUIRE_FRONTEND_IP, "TRUE")]).unwrap();
        assert_eq!(s.frontend_ip_policy, FrontendIpPolicy::RequireAtLeastOne);
        let s = settings(&[(ENV_REQUIRE_FRONTEND_IP, "no")]).unwrap();
        assert_eq!(s.frontend_ip_policy, FrontendIpPolicy::AllowEmpty);
        assert!(matches!(
            settings(&[(ENV_REQUIRE_FRONTEND_IP, "maybe")]),
            Err(LbConfigError::Config(_))
        ));
    }

    #[test]
    fn test_draft_file_from_group_and_name() {
        let s = settings(&[
            (ENV_RESOURCE_GROUP, "rg1"),
            (ENV_LB_NAME, "lb1"),
            (ENV_DRAFT_FILE, " "),
        ])
        .unwrap();
        assert_eq!(s.draft_file().unwrap(), "lb_draft_rg1_lb1.json");
    }

    #[test]
    fn test_draft_file_from_resource_id() {
        let s = settings(&[(ENV_LB_RESOURCE_ID, LB_B_ID), (ENV_LB_NAME, "ignored")]).unwrap();
        assert_eq!(s.draft_file().unwrap(), "lb_draft_rgB_lbB.json");

        let other = settings(&[(
            ENV_LB_RESOURCE_ID,
            "/subscriptions/subB/resourceGroups/rgB/providers/Microsoft.Network/loadBalancers/lbC",
        )])
        .unwrap();
        assert_ne!(other.draft_file().unwrap(), s.draft_file().unwrap());
    }

    #[test]
    fn test_draft_file_explicit() {
        let s = settings(&[(ENV_DRAFT_FILE, "my.json")]).unwrap();
        assert_eq!(s.draft_file().unwrap(), "my.json");
    }

    #[test]
    fn test_new_load_balancer_from_group_and_name() {
        let s = settings(&[
            (ENV_RESOURCE_GROUP, "rg1"),
            (ENV_LB_NAME, "lb1"),
            (ENV_LOCATION, "westeurope"),
        ])
        .unwrap();
        let lb = s
            .new_load_balancer(|| Ok(AzureContext::new("sub1")))
            .unwrap();
        assert_eq!(lb.subscription_id, "sub1");
        assert_eq!(lb.resource_group_name, "rg1");
        assert_eq!(lb.name, "lb1");
        assert_eq!(lb.location.as_deref(), Some("westeurope"));
    }

    #[test]
    fn test_new_load_balancer_from_resource_id() {
        let s = settings(&[(ENV_LB_RESOURCE_ID, LB_B_ID)]).unwrap();
        let lb = s.new_load_balancer(no_context).unwrap();
        assert_eq!(lb, LoadBalancer::new("subB", "rgB", "lbB"));
    }

    #[test]
    fn test_new_load_balancer_rejects_child_id() {
        let s = settings(&[(
            ENV_LB_RESOURCE_ID,
            "/subscriptions/sub9/resourceGroups/rg9/providers/Microsoft.Network/loadBalancers/lb9/probes/p1",
        )])
        .unwrap();
        assert!(matches!(
            s.new_load_balancer(no_context),
            Err(LbConfigError::InvalidResourceId(_))
        ));
    }

    #[test]
    fn test_new_load_balancer_missing_settings() {
        let s = settings(&[(ENV_LB_NAME, "lb1")]).unwrap();
        assert!(matches!(
            s.new_load_balancer(no_context),
            Err(LbConfigError::Config(_))
        ));
    }

    #[test]
    fn test_check_draft_matches_target() {
        let s = settings(&[(ENV_LB_RESOURCE_ID, LB_B_ID)]).unwrap();
        assert!(s.check_draft(&LoadBalancer::new("subB", "RGB", "lbb"), None).is_ok());
    }

    #[test]
    fn test_check_draft_other_load_balancer() {
        let s = settings(&[(ENV_LB_RESOURCE_ID, LB_B_ID)]).unwrap();
        let draft = LoadBalancer::new("subA", "rgA", "lbA");
        assert_eq!(
            s.check_draft(&draft, None).unwrap_err(),
            LbConfigError::DraftMismatch {
                expected: LB_B_ID.to_string(),
                found: draft.id(),
            }
        );
        assert!(s.check_draft(&LoadBalancer::new("subA", "rgB", "lbB"), None).is_err());
        assert!(s.check_draft(&LoadBalancer::new("subB", "rgB", "lbA"), None).is_err());
    }

    #[test]
    fn test_check_draft_group_and_name_uses_context_subscription() {
        let s = settings(&[(ENV_RESOURCE_GROUP, "rg1"), (ENV_LB_NAME, "lb1")]).unwrap();
        let draft = LoadBalancer::new("sub1", "rg1", "lb1");
        assert!(s.check_draft(&draft, None).is_ok());
        assert!(s.check_draft(&draft, Some("sub1")).is_ok());
        assert!(matches!(
            s.check_draft(&draft, Some("sub2")),
            Err(LbConfigError::DraftMismatch { .. })
        ));
    }

    #[test]
    fn test_check_draft_without_target_accepts_any() {
        let s = settings(&[(ENV_DRAFT_FILE, "my.json")]).unwrap();
        assert!(s.check_draft(&LoadBalancer::new("s", "g", "n"), Some("x")).is_ok());
    }
}
