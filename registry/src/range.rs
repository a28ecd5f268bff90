//! Bound checks for the `Range` kind, shared by declaration and evaluation.

use std::cmp::Ordering;

use thiserror::Error;
use vouch_core::Value;

/// Why a pair of range bounds is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeBoundsError {
    #[error("at least one of min or max is needed")]
    Missing,

    #[error("{name} bound must be a number, got {type_name}")]
    NotANumber {
        name: &'static str,
        type_name: &'static str,
    },

    #[error("{name} bound must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("min ({min}) is greater than max ({max})")]
    Inverted { min: Value, max: Value },
}

/// Check optional `min`/`max` bounds: at least one present, each a finite
/// number, and `min <= max` when both are given.
pub fn check_range_bounds(
    min: Option<&Value>,
    max: Option<&Value>,
) -> Result<(), RangeBoundsError> {
    for (name, bound) in [("min", min), ("max", max)] {
        if let Some(bound) = bound {
            check_bound(name, bound)?;
        }
    }
    match (min, max) {
        (None, None) => Err(RangeBoundsError::Missing),
        (Some(lo), Some(hi)) if lo.compare_number(hi) == Some(Ordering::Greater) => {
            Err(RangeBoundsError::Inverted {
                min: lo.clone(),
                max: hi.clone(),
            })
        }
        _ => Ok(()),
    }
}

fn check_bound(name: &'static str, bound: &Value) -> Result<(), RangeBoundsError> {
    match bound {
        Value::Int(_) => Ok(()),
        Value::Float(f) if f.is_finite() => Ok(()),
        Value::Float(f) => Err(RangeBoundsError::NotFinite { name, value: *f }),
        other => Err(RangeBoundsError::NotANumber {
            name,
            type_name: other.type_name(),
        }),
    }
}
