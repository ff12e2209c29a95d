//! Contact merge engine.
//!
//! # Responsibility
//! - Fold decoded contacts from many vCard texts into one contact list.
//! - Optionally combine by display name and enforce global number uniqueness.
//!
//! # Invariants
//! - Numbers inside one contact are unique and sorted lexicographically.
//! - With `dedupe_numbers`, a number survives only on its first contact.
//! - Contacts left without numbers are omitted.

pub mod engine;
