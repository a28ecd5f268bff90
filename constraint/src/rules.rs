//! Built-in rules.
//!
//! Length rules read the value's textual length, so a null value has length 0:
//! `MinLength(5)` fails on null and `MaxLength(n)` passes. Pairing a length
//! rule with `Required` is how a field demands a present value.
//! `Pattern` and `Range` let null through for the same reason.

use std::cmp::Ordering;

use regex_lite::Regex;
use vouch_core::Value;
use vouch_registry::{check_range_bounds, kinds, ConstraintParams};

use crate::{Outcome, ParamError, Rule};

/// Value must be non-null and not the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredRule;

impl Rule for RequiredRule {
    fn kind(&self) -> &str {
        kinds::REQUIRED
    }

    fn evaluate(&self, value: &Value, _params: &ConstraintParams) -> Result<Outcome, ParamError> {
        Ok(Outcome::pass_if(
            !value.is_null() && !value.is_empty_text(),
            || "{field} is required.".to_string(),
        ))
    }
}

/// Textual length must be at most `length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLengthRule;

impl Rule for MaxLengthRule {
    fn kind(&self) -> &str {
        kinds::MAX_LENGTH
    }

    fn check_params(&self, params: &ConstraintParams) -> Result<(), ParamError> {
        length_param(params).map(|_| ())
    }

    fn evaluate(&self, value: &Value, params: &ConstraintParams) -> Result<Outcome, ParamError> {
        let length = length_param(params)?;
        Ok(Outcome::pass_if(value.text_len() <= length, || {
            format!("{{field}} must be at most {} characters.", length)
        }))
    }
}

/// Textual length must be at least `length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLengthRule;

impl Rule for MinLengthRule {
    fn kind(&self) -> &str {
        kinds::MIN_LENGTH
    }

    fn check_params(&self, params: &ConstraintParams) -> Result<(), ParamError> {
        length_param(params).map(|_| ())
    }

    fn evaluate(&self, value: &Value, params: &ConstraintParams) -> Result<Outcome, ParamError> {
        let length = length_param(params)?;
        Ok(Outcome::pass_if(value.text_len() >= length, || {
            format!("{{field}} must be at least {} characters.", length)
        }))
    }
}

fn length_param(params: &ConstraintParams) -> Result<usize, ParamError> {
    let value = params.get("length").ok_or_else(|| ParamError::missing("length"))?;
    let length = value.as_int().ok_or_else(|| {
        ParamError::new(format!("length must be an integer, got {}", value.type_name()))
    })?;
    usize::try_from(length)
        .map_err(|_| ParamError::new(format!("length must not be negative, got {}", length)))
}

/// Text form must match the regex in `pattern`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRule;

impl Rule for PatternRule {
    fn kind(&self) -> &str {
        kinds::PATTERN
    }

    fn check_params(&self, params: &ConstraintParams) -> Result<(), ParamError> {
        compile_pattern(params).map(|_| ())
    }

    fn evaluate(&self, value: &Value, params: &ConstraintParams) -> Result<Outcome, ParamError> {
        let (source, regex) = compile_pattern(params)?;
        if value.is_null() {
            return Ok(Outcome::Pass);
        }
        Ok(Outcome::pass_if(regex.is_match(&value.to_text()), || {
            format!("{{field}} must match the pattern {}.", source)
        }))
    }
}

fn compile_pattern(params: &ConstraintParams) -> Result<(&str, Regex), ParamError> {
    let source = params
        .get_str("pattern")
        .ok_or_else(|| ParamError::missing("pattern"))?;
    let regex = Regex::new(source)
        .map_err(|e| ParamError::new(format!("invalid pattern '{}': {}", source, e)))?;
    Ok((source, regex))
}

/// Number must lie within the inclusive `min`/`max` bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeRule;

impl Rule for RangeRule {
    fn kind(&self) -> &str {
        kinds::RANGE
    }

    fn check_params(&self, params: &ConstraintParams) -> Result<(), ParamError> {
        range_bounds(params).map(|_| ())
    }

    fn evaluate(&self, value: &Value, params: &ConstraintParams) -> Result<Outcome, ParamError> {
        let (min, max) = range_bounds(params)?;
        if value.is_null() {
            return Ok(Outcome::Pass);
        }
        if value.as_number().is_none() {
            return Ok(Outcome::fail("{field} must be a number."));
        }

        let above_min = min.map_or(true, |m| value.compare_number(m).is_some_and(Ordering::is_ge));
        let below_max = max.map_or(true, |m| value.compare_number(m).is_some_and(Ordering::is_le));
        Ok(Outcome::pass_if(above_min && below_max, || match (min, max) {
            (Some(lo), Some(hi)) => format!("{{field}} must be between {} and {}.", lo, hi),
            (Some(lo), None) => format!("{{field}} must be at least {}.", lo),
            (None, Some(hi)) => format!("{{field}} must be at most {}.", hi),
            (None, None) => unreachable!("range_bounds requires a bound"),
        }))
    }
}

fn range_bounds(params: &ConstraintParams) -> Result<(Option<&Value>, Option<&Value>), ParamError> {
    let min = params.get("min");
    let max = params.get("max");
    check_range_bounds(min, max).map_err(|e| ParamError::new(e.to_string()))?;
    Ok((min, max))
}
