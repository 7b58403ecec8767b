//! Subscription context for new drafts.
//!
//! The subscription id is taken as-is from the environment; resolving it from
//! credentials is left to the Azure tooling that exported it.

use crate::error::{LbConfigError, LbConfigResult};

/// Environment variable holding the subscription id.
pub const ENV_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";

/// Account scope the edited resources live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureContext {
    subscription_id: String,
}

impl AzureContext {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        AzureContext {
            subscription_id: subscription_id.into(),
        }
    }

    /// Read the context from the process environment.
    pub fn from_env() -> LbConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the context through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> LbConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENV_SUBSCRIPTION_ID) {
            Some(id) if !id.trim().is_empty() => {
                log::debug!("Using subscription {id} from {ENV_SUBSCRIPTION_ID}");
                Ok(AzureContext::new(id.trim()))
            }
            _ => Err(LbConfigError::Config(format!(
                "{ENV_SUBSCRIPTION_ID} is not set"
            ))),
        }
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
}
