//! Domain model for number and contact flows.
//!
//! # Responsibility
//! - Define the value types passed between normalizer, codec and merge engine.
//! - Keep output naming and ordering in one shared shape.
//!
//! # Invariants
//! - `CanonicalNumber` is only constructed by the normalizer.
//! - `OutputBundle` keeps units in set-number order.

pub mod contact;
pub mod number;
pub mod output;
