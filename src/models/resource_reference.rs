//! Back-reference to a sibling sub-resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper pointing at a sibling sub-resource without owning it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceReference {
    /// Full resource id of the referenced sub-resource.
    pub id: String,
}

impl ResourceReference {
    pub fn new(id: impl Into<String>) -> Self {
        ResourceReference { id: id.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Trailing name segment of the referenced id.
    pub fn name(&self) -> &str {
        crate::azure::resource_name(&self.id)
    }
}

impl From<&str> for ResourceReference {
    fn from(id: &str) -> Self {
        ResourceReference::new(id)
    }
}

impl From<String> for ResourceReference {
    fn from(id: String) -> Self {
        ResourceReference { id }
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
