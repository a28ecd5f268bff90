//! Vouch demo library.
//!
//! Declares a `User` type, registers it once for the whole process, and
//! validates instances built from command-line input.
//!
//! - `model`: the demo type and its constraint declarations
//! - `format`: text and JSON rendering of a validation result

mod format;
mod model;

use thiserror::Error;
use vouch_constraint::{Catalog, ConstraintError, Validator};
use vouch_registry::RegistryError;

pub use format::{format_json, format_text, OutputFormat};
pub use model::{registry, User};

/// Errors that stop the demo. Invalid data is not one of them.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("declaration error: {0}")]
    Registry(#[from] RegistryError),

    #[error("configuration error: {0}")]
    Constraint(#[from] ConstraintError),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Validate `user` and render the result in `format`.
pub fn run(user: &User, format: OutputFormat) -> Result<String, DemoError> {
    let registry = registry()?;
    let catalog = Catalog::builtin();
    let validator = Validator::new(registry, &catalog);
    validator.check_declarations()?;

    let violations = validator.validate(user)?;
    tracing::info!(violations = violations.len(), "validated user");

    match format {
        OutputFormat::Text => Ok(format_text(&violations)),
        OutputFormat::Json => Ok(format_json(&violations)?),
    }
}
