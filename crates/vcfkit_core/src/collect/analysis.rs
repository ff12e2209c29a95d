//! Read-only statistics over a token stream.

use crate::collect::collector::{collect, CollectReport};
use crate::normalize::phone::NormalizeOptions;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of what a collection pass would produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NumberAnalysis {
    #[serde(flatten)]
    pub report: CollectReport,
    /// Unique numbers per country calling code, ascending by code.
    pub by_country_code: BTreeMap<u16, usize>,
}

/// Runs the collector over `tokens` and tallies unique numbers by
/// country calling code.
pub fn analyze<I, S>(tokens: I, options: &NormalizeOptions) -> NumberAnalysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let collection = collect(tokens, options);
    let mut by_country_code = BTreeMap::new();
    for number in &collection.numbers {
        *by_country_code.entry(number.country_code()).or_insert(0) += 1;
    }
    NumberAnalysis {
        report: collection.report(),
        by_country_code,
    }
}
