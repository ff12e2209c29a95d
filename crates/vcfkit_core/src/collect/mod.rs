//! Multi-source number collection.
//!
//! # Responsibility
//! - Apply the normalizer to every raw token in source order.
//! - Deduplicate canonical values while keeping first-seen order.
//! - Report total / skipped / duplicate counts for status messages.
//!
//! # Invariants
//! - Output never contains the same canonical value twice.
//! - Output order is first appearance across all sources, never sorted.
//! - `total == valid + skipped + duplicates`.

pub mod analysis;
pub mod collector;
