//! Constraint checking.

use tracing::{debug, trace, warn};
use vouch_core::Value;
use vouch_registry::{ConstraintDef, Registry};

use crate::error::{ConstraintError, ConstraintResult};
use crate::violation::{Violation, Violations};
use crate::{Catalog, Outcome};

/// What to do with a constraint whose kind the catalog does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownConstraintPolicy {
    /// Abort with `ConstraintError::UnknownConstraint`.
    #[default]
    Fail,
    /// Log a warning and ignore the constraint.
    Skip,
}

/// Validates objects against the constraints registered for their type.
///
/// Holds only shared references, so one validator can serve many threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r, 'c> {
    registry: &'r Registry,
    catalog: &'c Catalog,
    unknown: UnknownConstraintPolicy,
}

impl<'r, 'c> Validator<'r, 'c> {
    /// Create a new validator.
    pub fn new(registry: &'r Registry, catalog: &'c Catalog) -> Self {
        Self {
            registry,
            catalog,
            unknown: UnknownConstraintPolicy::default(),
        }
    }

    /// Set how unknown constraint kinds are handled.
    pub fn with_unknown_policy(mut self, policy: UnknownConstraintPolicy) -> Self {
        self.unknown = policy;
        self
    }

    pub fn unknown_policy(&self) -> UnknownConstraintPolicy {
        self.unknown
    }

    /// Validate `target`, collecting a violation for every failed constraint.
    ///
    /// Fields are visited in declaration order, and within a field every
    /// constraint is evaluated in declaration order, even after a failure.
    pub fn validate<T: 'static>(&self, target: &T) -> ConstraintResult<Violations> {
        let schema = self
            .registry
            .schema_of::<T>()
            .ok_or_else(|| ConstraintError::unregistered_type(std::any::type_name::<T>()))?;

        debug!(
            type_name = schema.name(),
            fields = schema.fields().len(),
            "validating"
        );

        let mut violations = Violations::new();
        for field in schema.fields() {
            let value = field.read(target);
            for constraint in field.constraints() {
                if let Some(violation) = self.check_constraint(field.name(), constraint, &value)? {
                    violations.push(violation);
                }
            }
        }

        debug!(
            type_name = schema.name(),
            violations = violations.len(),
            "validation finished"
        );
        Ok(violations)
    }

    /// Validate `target` and return only the messages.
    pub fn validate_messages<T: 'static>(&self, target: &T) -> ConstraintResult<Vec<String>> {
        self.validate(target).map(Violations::into_messages)
    }

    /// Returns true if `target` violates no constraint.
    pub fn is_valid<T: 'static>(&self, target: &T) -> ConstraintResult<bool> {
        self.validate(target).map(|v| v.is_empty())
    }

    /// Check every declaration in the registry against the catalog.
    ///
    /// Reports the first constraint whose kind is unknown (unless the policy is
    /// `Skip`) or whose parameters the rule rejects. Meant to be called once at
    /// startup so configuration mistakes surface before any data is validated.
    pub fn check_declarations(&self) -> ConstraintResult<()> {
        for schema in self.registry.all_schemas() {
            for decl in schema.declarations() {
                for constraint in decl.constraints {
                    let Some(rule) = self.catalog.get(constraint.kind()) else {
                        self.on_unknown(decl.name, constraint)?;
                        continue;
                    };
                    rule.check_params(constraint.params()).map_err(|e| {
                        ConstraintError::invalid_parameter(constraint.kind(), decl.name, e)
                    })?;
                }
            }
        }
        Ok(())
    }

    // ========== Internal checking methods ==========

    /// Check a single constraint against a field's value.
    fn check_constraint(
        &self,
        field: &str,
        constraint: &ConstraintDef,
        value: &Value,
    ) -> ConstraintResult<Option<Violation>> {
        let Some(rule) = self.catalog.get(constraint.kind()) else {
            self.on_unknown(field, constraint)?;
            return Ok(None);
        };

        let outcome = rule
            .evaluate(value, constraint.params())
            .map_err(|e| ConstraintError::invalid_parameter(constraint.kind(), field, e))?;

        match outcome {
            Outcome::Pass => Ok(None),
            Outcome::Fail(template) => {
                let message = template.render(field);
                trace!(field, kind = constraint.kind(), %message, "constraint failed");
                Ok(Some(Violation::new(field, constraint.kind(), message)))
            }
        }
    }

    fn on_unknown(&self, field: &str, constraint: &ConstraintDef) -> ConstraintResult<()> {
        match self.unknown {
            UnknownConstraintPolicy::Fail => {
                Err(ConstraintError::unknown_constraint(constraint.kind(), field))
            }
            UnknownConstraintPolicy::Skip => {
                warn!(field, kind = constraint.kind(), "skipping unknown constraint kind");
                Ok(())
            }
        }
    }
}
