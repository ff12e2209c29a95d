//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate sources, collector, codec and partitioner into the
//!   convert / extract / analyze / split use-cases.
//! - Emit metadata-only log events (counts, never phone numbers).

pub mod convert_service;
pub mod split_service;
