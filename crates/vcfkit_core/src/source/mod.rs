//! Raw token sources (text, CSV, vCard).
//!
//! # Responsibility
//! - Turn uploaded/pasted content into ordered raw tokens.
//! - Select CSV columns explicitly; columns are never guessed.
//!
//! # Invariants
//! - File sources keep insertion order; manual text is always appended last.

pub mod ingest;
