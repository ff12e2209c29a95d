//! Raw token to canonical number conversion.
//!
//! # Responsibility
//! - Parse heterogeneous raw phone text into `+<countrycode><digits>` form.
//! - Expose strict (numbering-plan valid) and lenient (plausible length)
//!   acceptance explicitly.
//!
//! # Invariants
//! - Normalization is pure and never panics or returns an error.
//! - Re-normalizing a canonical number yields the same number.

pub mod phone;
