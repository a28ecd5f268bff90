//! The Registry - immutable per-type field declarations.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::{ConstraintDef, Schema};

/// A field name together with its declared constraints.
#[derive(Debug, Clone, Copy)]
pub struct FieldDeclaration<'a> {
    pub name: &'a str,
    pub constraints: &'a [ConstraintDef],
}

/// Type-erased view of a `Schema<T>`.
///
/// Lets callers walk every declaration in a registry without knowing the
/// concrete Rust types, e.g. to check that every constraint kind is known.
pub trait SchemaInfo: Any + Send + Sync + fmt::Debug {
    /// The name the type was registered under.
    fn type_name(&self) -> &str;

    /// Field declarations in declaration order.
    fn declarations(&self) -> Vec<FieldDeclaration<'_>>;

    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> SchemaInfo for Schema<T> {
    fn type_name(&self) -> &str {
        self.name()
    }

    fn declarations(&self) -> Vec<FieldDeclaration<'_>> {
        self.fields()
            .iter()
            .map(|f| FieldDeclaration {
                name: f.name(),
                constraints: f.constraints(),
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The Registry provides runtime lookup of field declarations by type.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Schemas by Rust type.
    schemas: HashMap<TypeId, Box<dyn SchemaInfo>>,
    /// Type lookup by registered name.
    type_names: HashMap<String, TypeId>,
    /// Registration order.
    order: Vec<TypeId>,
}

impl Registry {
    pub(crate) fn new(
        schemas: HashMap<TypeId, Box<dyn SchemaInfo>>,
        type_names: HashMap<String, TypeId>,
        order: Vec<TypeId>,
    ) -> Self {
        Self {
            schemas,
            type_names,
            order,
        }
    }

    // ==================== Schema Lookups ====================

    /// Get the schema declared for `T`.
    pub fn schema_of<T: 'static>(&self) -> Option<&Schema<T>> {
        self.schemas
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<Schema<T>>())
    }

    /// Check if `T` has been registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<T>())
    }

    /// Get a schema by its registered name.
    pub fn get_by_name(&self, name: &str) -> Option<&dyn SchemaInfo> {
        self.type_names
            .get(name)
            .and_then(|id| self.schemas.get(id))
            .map(|s| s.as_ref())
    }

    /// All schemas, in registration order.
    pub fn all_schemas(&self) -> impl Iterator<Item = &dyn SchemaInfo> {
        self.order
            .iter()
            .filter_map(|id| self.schemas.get(id))
            .map(|s| s.as_ref())
    }

    /// Get the number of registered types.
    pub fn type_count(&self) -> usize {
        self.schemas.len()
    }
}
