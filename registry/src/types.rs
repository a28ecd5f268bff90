//! Declaration types: constraints, field descriptors and per-type schemas.

use std::fmt;

use vouch_core::Value;

use crate::{check_range_bounds, RegistryError, RegistryResult};

/// Names of the built-in constraint kinds.
pub mod kinds {
    /// Value must be non-null and not the empty string.
    pub const REQUIRED: &str = "Required";
    /// Text length must not exceed `length`.
    pub const MAX_LENGTH: &str = "MaxLength";
    /// Text length must reach `length`.
    pub const MIN_LENGTH: &str = "MinLength";
    /// Text must match the regex in `pattern`.
    pub const PATTERN: &str = "Pattern";
    /// Number must lie within the inclusive `min`/`max` bounds.
    pub const RANGE: &str = "Range";
}

/// Kind-specific constraint parameters, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintParams {
    entries: Vec<(String, Value)>,
}

impl ConstraintParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. A later value for the same name replaces the earlier one.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Get an integer parameter by name.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Get a string parameter by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Iterate over all parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// One rule attached to a field: a kind plus its parameters.
///
/// The built-in constructors check their parameters, so a `ConstraintDef`
/// produced by them is always well formed. `ConstraintDef::new` is the entry
/// point for custom kinds; their parameters are checked by the rule that
/// implements the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintDef {
    kind: String,
    params: ConstraintParams,
}

impl ConstraintDef {
    /// Create a constraint of any kind with no parameters.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: ConstraintParams::new(),
        }
    }

    /// Add a parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params = self.params.with(name, value);
        self
    }

    pub fn required() -> Self {
        Self::new(kinds::REQUIRED)
    }

    pub fn max_length(length: i64) -> RegistryResult<Self> {
        let length = check_length(kinds::MAX_LENGTH, length)?;
        Ok(Self::new(kinds::MAX_LENGTH).with_param("length", length))
    }

    pub fn min_length(length: i64) -> RegistryResult<Self> {
        let length = check_length(kinds::MIN_LENGTH, length)?;
        Ok(Self::new(kinds::MIN_LENGTH).with_param("length", length))
    }

    /// Text must match `pattern`. The pattern is compiled once here to reject
    /// invalid syntax.
    pub fn pattern(pattern: impl Into<String>) -> RegistryResult<Self> {
        let pattern = pattern.into();
        if let Err(e) = regex_lite::Regex::new(&pattern) {
            return Err(RegistryError::invalid_pattern(pattern, e.to_string()));
        }
        Ok(Self::new(kinds::PATTERN).with_param("pattern", pattern))
    }

    /// Number must lie within `min..=max`.
    pub fn range(min: impl Into<Value>, max: impl Into<Value>) -> RegistryResult<Self> {
        Self::bounded(Some(min.into()), Some(max.into()))
    }

    /// Number must be at least `min`.
    pub fn at_least(min: impl Into<Value>) -> RegistryResult<Self> {
        Self::bounded(Some(min.into()), None)
    }

    /// Number must be at most `max`.
    pub fn at_most(max: impl Into<Value>) -> RegistryResult<Self> {
        Self::bounded(None, Some(max.into()))
    }

    fn bounded(min: Option<Value>, max: Option<Value>) -> RegistryResult<Self> {
        check_range_bounds(min.as_ref(), max.as_ref())
            .map_err(|e| RegistryError::invalid_parameter(kinds::RANGE, e.to_string()))?;
        let mut def = Self::new(kinds::RANGE);
        if let Some(min) = min {
            def = def.with_param("min", min);
        }
        if let Some(max) = max {
            def = def.with_param("max", max);
        }
        Ok(def)
    }

    /// The kind tag used to look up the evaluating rule.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn params(&self) -> &ConstraintParams {
        &self.params
    }

    /// Returns true if this constraint has the given kind.
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for ConstraintDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.params.is_empty() {
            write!(f, "(")?;
            for (i, (name, value)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", name, value)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

fn check_length(kind: &str, length: i64) -> RegistryResult<i64> {
    if length < 0 {
        return Err(RegistryError::invalid_parameter(
            kind,
            format!("length must not be negative, got {}", length),
        ));
    }
    Ok(length)
}

type Accessor<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

/// A field of `T`: its name, how to read it, and its constraints.
pub struct FieldDef<T> {
    name: String,
    accessor: Accessor<T>,
    constraints: Vec<ConstraintDef>,
}

impl<T> FieldDef<T> {
    /// Declare a field read by `accessor`.
    pub fn new<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            accessor: Box::new(accessor),
            constraints: Vec::new(),
        }
    }

    /// Attach a constraint after those already attached.
    pub fn with(mut self, constraint: ConstraintDef) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn required(self) -> Self {
        self.with(ConstraintDef::required())
    }

    pub fn max_length(self, length: i64) -> RegistryResult<Self> {
        Ok(self.with(ConstraintDef::max_length(length)?))
    }

    pub fn min_length(self, length: i64) -> RegistryResult<Self> {
        Ok(self.with(ConstraintDef::min_length(length)?))
    }

    pub fn pattern(self, pattern: impl Into<String>) -> RegistryResult<Self> {
        Ok(self.with(ConstraintDef::pattern(pattern)?))
    }

    pub fn range(self, min: impl Into<Value>, max: impl Into<Value>) -> RegistryResult<Self> {
        Ok(self.with(ConstraintDef::range(min, max)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constraints in declaration order.
    pub fn constraints(&self) -> &[ConstraintDef] {
        &self.constraints
    }

    /// Read this field's current value from `target`.
    pub fn read(&self, target: &T) -> Value {
        (self.accessor)(target)
    }
}

impl<T> fmt::Debug for FieldDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}

/// The ordered field declarations of one type.
pub struct Schema<T> {
    name: String,
    fields: Vec<FieldDef<T>>,
}

impl<T> Schema<T> {
    pub(crate) fn new(name: String, fields: Vec<FieldDef<T>>) -> Self {
        Self { name, fields }
    }

    /// The name the type was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDef<T>] {
        &self.fields
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Total number of constraints across all fields.
    pub fn constraint_count(&self) -> usize {
        self.fields.iter().map(|f| f.constraints.len()).sum()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}
