//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Configuration errors raised while validating.
///
/// A value failing a constraint is not an error; it becomes a `Violation`.
#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("Unknown constraint kind '{kind}' on field '{field}'")]
    UnknownConstraint { kind: String, field: String },

    #[error("Invalid parameters for {kind} on field '{field}': {reason}")]
    InvalidParameter {
        kind: String,
        field: String,
        reason: String,
    },

    #[error("Type not registered: {type_name}")]
    UnregisteredType { type_name: String },

    #[error("Rule already registered for kind: {kind}")]
    DuplicateRule { kind: String },
}

impl ConstraintError {
    pub fn unknown_constraint(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownConstraint {
            kind: kind.into(),
            field: field.into(),
        }
    }

    pub fn invalid_parameter(
        kind: impl Into<String>,
        field: impl Into<String>,
        err: ParamError,
    ) -> Self {
        Self::InvalidParameter {
            kind: kind.into(),
            field: field.into(),
            reason: err.0,
        }
    }

    pub fn unregistered_type(type_name: impl Into<String>) -> Self {
        Self::UnregisteredType {
            type_name: type_name.into(),
        }
    }

    pub fn duplicate_rule(kind: impl Into<String>) -> Self {
        Self::DuplicateRule { kind: kind.into() }
    }
}

/// A rule's parameters are missing or malformed.
///
/// Rules do not know which field they are attached to; the validator adds
/// that context when it turns this into a `ConstraintError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParamError(pub String);

impl ParamError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn missing(name: &str) -> Self {
        Self(format!("missing parameter '{}'", name))
    }
}
