//! The extension point for constraint kinds.

use vouch_core::Value;
use vouch_registry::ConstraintParams;

use crate::ParamError;

/// Placeholder replaced by the field name when a message is rendered.
pub const FIELD_PLACEHOLDER: &str = "{field}";

/// Evaluation logic for one constraint kind.
///
/// Implement this and register it in a `Catalog` to add a kind; the
/// validator dispatches on `kind()` and needs no changes.
pub trait Rule: Send + Sync {
    /// The kind name this rule answers to, e.g. `"MaxLength"`.
    fn kind(&self) -> &str;

    /// Check that `params` are well formed for this kind.
    fn check_params(&self, _params: &ConstraintParams) -> Result<(), ParamError> {
        Ok(())
    }

    /// Evaluate `value` against this rule.
    ///
    /// Must be pure: the same value and parameters always give the same outcome.
    fn evaluate(&self, value: &Value, params: &ConstraintParams) -> Result<Outcome, ParamError>;
}

/// The result of evaluating one constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(MessageTemplate),
}

impl Outcome {
    /// Fail with a message template containing `{field}`.
    pub fn fail(template: impl Into<String>) -> Self {
        Self::Fail(MessageTemplate::new(template))
    }

    /// Pass when `ok`, otherwise fail with the template built by `message`.
    pub fn pass_if(ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok {
            Self::Pass
        } else {
            Self::fail(message())
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }
}

/// A failure message with a `{field}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute the field name into the template.
    pub fn render(&self, field: &str) -> String {
        self.0.replace(FIELD_PLACEHOLDER, field)
    }
}
