//! The demo `User` type and its declarations.

use std::sync::OnceLock;

use vouch_core::Value;
use vouch_registry::{FieldDef, Registry, RegistryBuilder, RegistryResult};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// A user account. Fields are private; the registry reads them through
/// accessors declared in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    role: String,
}

impl User {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }

    fn declare(builder: &mut RegistryBuilder) -> RegistryResult<()> {
        builder
            .add_type::<User>("User")
            .field(
                FieldDef::new("username", |u: &User| Value::from(&u.username))
                    .required()
                    .max_length(20)?
                    .min_length(5)?,
            )
            .field(FieldDef::new("role", |u: &User| Value::from(&u.role)).max_length(10)?)
            .done()
    }
}

/// The process-wide registry, built on first use and never mutated afterwards.
pub fn registry() -> RegistryResult<&'static Registry> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let mut builder = RegistryBuilder::new();
    User::declare(&mut builder)?;
    // A concurrent caller may win the race; either registry is identical.
    Ok(REGISTRY.get_or_init(|| builder.build()))
}
