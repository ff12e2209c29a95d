//! Fixed-size batching with deterministic set numbering.
//!
//! # Responsibility
//! - Split ordered sequences into bounded groups.
//! - Assign contiguous set numbers and output unit names.
//!
//! # Invariants
//! - Zero batch size or zero start set number is rejected up front.
//! - Batches never reorder or rebalance items; only the last may be short.

pub mod partition;
