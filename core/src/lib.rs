//! Vouch Core Types
//!
//! This crate provides the foundational types shared by the vouch crates:
//! - The `Value` enum, the runtime form of a field's current value
//! - Conversions from Rust scalars and optional values

mod value;

pub use value::*;
