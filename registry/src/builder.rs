//! RegistryBuilder for constructing an immutable Registry.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::{FieldDef, Registry, Schema, SchemaInfo};

/// Result type for declaration and registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while declaring constraints or building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Type already registered: {0}")]
    DuplicateType(String),

    #[error("Duplicate field '{field}' on type {type_name}")]
    DuplicateFieldName { type_name: String, field: String },

    #[error("Invalid parameter for {kind}: {reason}")]
    InvalidParameter { kind: String, reason: String },

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl RegistryError {
    pub fn invalid_parameter(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Schemas being built, keyed by Rust type.
    schemas: HashMap<TypeId, Box<dyn SchemaInfo>>,
    /// Registered name to type mapping.
    type_names: HashMap<String, TypeId>,
    /// Registration order.
    order: Vec<TypeId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start declaring the fields of `T`.
    pub fn add_type<T: 'static>(&mut self, name: impl Into<String>) -> TypeBuilder<'_, T> {
        TypeBuilder {
            builder: self,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        debug!(types = self.order.len(), "registry built");
        Registry::new(self.schemas, self.type_names, self.order)
    }
}

/// Builder for the field declarations of one type.
pub struct TypeBuilder<'a, T> {
    builder: &'a mut RegistryBuilder,
    name: String,
    fields: Vec<FieldDef<T>>,
}

impl<'a, T: 'static> TypeBuilder<'a, T> {
    /// Add a field after those already declared.
    pub fn field(mut self, field: FieldDef<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> RegistryResult<()> {
        // Check for duplicate name
        if self.builder.type_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateTypeName(self.name));
        }

        let type_id = TypeId::of::<T>();
        if self.builder.schemas.contains_key(&type_id) {
            return Err(RegistryError::DuplicateType(self.name));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name()) {
                return Err(RegistryError::DuplicateFieldName {
                    type_name: self.name.clone(),
                    field: field.name().to_string(),
                });
            }
        }

        let schema = Schema::new(self.name.clone(), self.fields);
        debug!(
            type_name = %self.name,
            fields = schema.fields().len(),
            constraints = schema.constraint_count(),
            "registered type"
        );

        self.builder.type_names.insert(self.name, type_id);
        self.builder.schemas.insert(type_id, Box::new(schema));
        self.builder.order.push(type_id);

        Ok(())
    }
}
