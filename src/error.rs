//! Error types for load balancer configuration edits.

use thiserror::Error;

/// Errors raised while editing a load balancer draft.
///
/// Every variant is raised before the draft is touched, so a caller that gets an
/// error back can fix its input and retry against the same load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LbConfigError {
    /// A sibling with the same name (case-insensitive) already exists.
    #[error("{kind} with the specified name already exists: '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    /// A mandatory back-reference was not supplied.
    #[error("{reference} missing, please associate a {reference} with the {kind}")]
    MissingRequiredReference {
        kind: &'static str,
        reference: &'static str,
    },

    /// The rule has no frontend IP configuration and the policy requires one.
    #[error("LoadBalancingRule '{rule}' needs at least one frontend IP configuration")]
    MissingFrontendIpConfiguration { rule: String },

    /// No child with that name exists.
    #[error("{kind} not found: '{name}'")]
    NotFound { kind: &'static str, name: String },

    /// Path does not follow the Azure resource id template.
    #[error("Invalid resource id: {0}")]
    InvalidResourceId(String),

    /// Protocol string is neither Tcp nor Udp.
    #[error("Unknown transport protocol: {0}")]
    UnknownProtocol(String),

    /// Required setting missing or unparsable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The draft on disk belongs to another load balancer.
    #[error("Draft is for {found}, configured load balancer is {expected}")]
    DraftMismatch { expected: String, found: String },

    /// Reading or writing a local draft file failed.
    #[error("Draft error: {0}")]
    Draft(String),
}

/// Result type for load balancer configuration edits.
pub type LbConfigResult<T> = Result<T, LbConfigError>;

impl From<serde_json::Error> for LbConfigError {
    fn from(err: serde_json::Error) -> Self {
        LbConfigError::Draft(err.to_string())
    }
}

impl From<std::io::Error> for LbConfigError {
    fn from(err: std::io::Error) -> Self {
        LbConfigError::Draft(err.to_string())
    }
}
