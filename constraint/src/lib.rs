//! Vouch Constraint
//!
//! Validate objects against the constraints declared for their type.
//!
//! Responsibilities:
//! - Hold the catalog of rule kinds and their evaluation logic
//! - Walk a target's declared fields in order and evaluate every constraint
//! - Collect one violation per failed constraint, never stopping early
//! - Report configuration errors (unknown kinds, bad parameters) separately

mod catalog;
mod checker;
mod error;
mod rule;
mod rules;
mod violation;

pub use catalog::Catalog;
pub use checker::{UnknownConstraintPolicy, Validator};
pub use error::{ConstraintError, ConstraintResult, ParamError};
pub use rule::{MessageTemplate, Outcome, Rule};
pub use rules::{MaxLengthRule, MinLengthRule, PatternRule, RangeRule, RequiredRule};
pub use violation::{Violation, Violations};
