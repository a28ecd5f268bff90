//! The catalog of known constraint kinds.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ConstraintError, ConstraintResult};
use crate::rules::{MaxLengthRule, MinLengthRule, PatternRule, RangeRule, RequiredRule};
use crate::Rule;

/// Maps constraint kind names to the rules that evaluate them.
pub struct Catalog {
    rules: HashMap<String, Box<dyn Rule>>,
}

impl Catalog {
    /// Create a catalog with no rules.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a catalog holding the built-in rules:
    /// Required, MaxLength, MinLength, Pattern and Range.
    pub fn builtin() -> Self {
        let builtins: [Box<dyn Rule>; 5] = [
            Box::new(RequiredRule),
            Box::new(MaxLengthRule),
            Box::new(MinLengthRule),
            Box::new(PatternRule),
            Box::new(RangeRule),
        ];
        let rules = builtins
            .into_iter()
            .map(|rule| (rule.kind().to_string(), rule))
            .collect();
        Self { rules }
    }

    /// Register a rule under its kind.
    pub fn register(&mut self, rule: impl Rule + 'static) -> ConstraintResult<()> {
        let kind = rule.kind().to_string();
        if self.rules.contains_key(&kind) {
            return Err(ConstraintError::duplicate_rule(kind));
        }
        self.rules.insert(kind, Box::new(rule));
        Ok(())
    }

    /// Builder-style `register`.
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> ConstraintResult<Self> {
        self.register(rule)?;
        Ok(self)
    }

    /// Get the rule for a kind.
    pub fn get(&self, kind: &str) -> Option<&dyn Rule> {
        self.rules.get(kind).map(|r| r.as_ref())
    }

    /// Check if a kind is known.
    pub fn contains(&self, kind: &str) -> bool {
        self.rules.contains_key(kind)
    }

    /// All known kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.rules.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("kinds", &self.kinds())
            .finish()
    }
}
