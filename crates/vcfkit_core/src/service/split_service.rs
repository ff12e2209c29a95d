//! Raw TXT/VCF splitting use-cases.
//!
//! # Invariants
//! - Lines and records are never normalized or reordered.
//! - Unit names are `"{prefix} {set_number}"`.

use crate::batch::partition::{partition, BatchError};
use crate::model::output::OutputBundle;
use crate::vcard::records::split_records;
use log::info;
use serde::{Deserialize, Serialize};

/// Chunking parameters for raw splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitSettings {
    pub prefix: String,
    pub chunk_size: usize,
    pub start_set_number: u32,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            prefix: "split".to_string(),
            chunk_size: 100,
            start_set_number: 1,
        }
    }
}

/// Splits trimmed text into chunks of `chunk_size` lines.
pub fn split_lines(text: &str, settings: &SplitSettings) -> Result<OutputBundle, BatchError> {
    let trimmed = text.trim();
    let lines: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.lines().collect()
    };
    let bundle = chunk(&lines, settings)?;
    info!(
        "event=split_txt module=service status=ok lines={} units={}",
        lines.len(),
        bundle.len()
    );
    Ok(bundle)
}

/// Splits vCard text into chunks of `chunk_size` records.
pub fn split_vcard(text: &str, settings: &SplitSettings) -> Result<OutputBundle, BatchError> {
    let records = split_records(text);
    let bundle = chunk(&records, settings)?;
    info!(
        "event=split_vcf module=service status=ok records={} units={}",
        records.len(),
        bundle.len()
    );
    Ok(bundle)
}

fn chunk<S: AsRef<str>>(items: &[S], settings: &SplitSettings) -> Result<OutputBundle, BatchError> {
    let batches = partition(items, settings.chunk_size, settings.start_set_number)?;
    let mut bundle = OutputBundle::new();
    for batch in batches {
        let content = batch
            .items
            .iter()
            .map(|item| item.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");
        bundle.push(batch.unit_name(&settings.prefix), content);
    }
    Ok(bundle)
}
