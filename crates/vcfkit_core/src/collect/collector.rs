//! Order-stable, duplicate-free collector.

use crate::model::number::CanonicalNumber;
use crate::normalize::phone::{normalize_with, NormalizeOptions};
use serde::Serialize;
use std::collections::HashSet;

/// Counters reported back to the caller after a collection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectReport {
    /// Raw tokens seen, valid or not.
    pub total: usize,
    /// Unique canonical numbers kept.
    pub valid: usize,
    /// Tokens that did not normalize.
    pub skipped: usize,
    /// Valid tokens whose canonical value was already collected.
    pub duplicates: usize,
}

/// Result of one collection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub numbers: Vec<CanonicalNumber>,
    pub total: usize,
    pub skipped: usize,
    pub duplicates: usize,
}

impl Collection {
    /// Returns `true` when no token produced a valid number.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn report(&self) -> CollectReport {
        CollectReport {
            total: self.total,
            valid: self.numbers.len(),
            skipped: self.skipped,
            duplicates: self.duplicates,
        }
    }
}

/// Incremental collector; feed tokens in source order, then `finish`.
#[derive(Debug, Default)]
pub struct NumberCollector {
    options: NormalizeOptions,
    seen: HashSet<String>,
    collection: Collection,
}

impl NumberCollector {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            seen: HashSet::new(),
            collection: Collection::default(),
        }
    }

    /// Normalizes and records one raw token.
    ///
    /// Returns `true` only when the token added a new canonical number.
    pub fn push(&mut self, raw: &str) -> bool {
        self.collection.total += 1;
        let Some(number) = normalize_with(raw, &self.options) else {
            self.collection.skipped += 1;
            return false;
        };
        if !self.seen.insert(number.as_str().to_string()) {
            self.collection.duplicates += 1;
            return false;
        }
        self.collection.numbers.push(number);
        true
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.push(token.as_ref());
        }
    }

    pub fn finish(self) -> Collection {
        self.collection
    }
}

/// Collects unique canonical numbers from `tokens` in first-seen order.
pub fn collect<I, S>(tokens: I, options: &NormalizeOptions) -> Collection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collector = NumberCollector::new(options.clone());
    collector.extend(tokens);
    collector.finish()
}
