//! Vouch Registry
//!
//! The metadata store read by the validation engine.
//!
//! Responsibilities:
//! - Declare constraints and attach them to fields
//! - Describe how each field's value is read from an instance
//! - Hold the ordered field declarations of every registered type
//! - Reject malformed declarations before any validation runs

mod builder;
mod range;
mod registry;
mod types;

pub use builder::{RegistryBuilder, RegistryError, RegistryResult, TypeBuilder};
pub use range::{check_range_bounds, RangeBoundsError};
pub use registry::{FieldDeclaration, Registry, SchemaInfo};
pub use types::{kinds, ConstraintDef, ConstraintParams, FieldDef, Schema};
