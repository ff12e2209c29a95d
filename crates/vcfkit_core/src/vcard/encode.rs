//! Number batches to vCard text.

use crate::batch::partition::{partition, BatchError};
use crate::model::output::OutputBundle;
use crate::vcard::push_record;
use serde::{Deserialize, Serialize};

/// Naming and batching parameters for vCard generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodeSettings {
    /// Contact name prefix used in `N`/`FN`.
    pub name_prefix: String,
    /// Output unit prefix, e.g. `general_file` gives `general_file 1`.
    pub file_prefix: String,
    pub start_set_number: u32,
    pub batch_size: usize,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            name_prefix: "General".to_string(),
            file_prefix: "general_file".to_string(),
            start_set_number: 1,
            batch_size: 50,
        }
    }
}

/// Zero-pad width for a batch holding `count` items.
///
/// A batch of 50 pads to 2 digits, a batch of 100 to 3.
pub fn index_width(count: usize) -> usize {
    count.max(1).to_string().len()
}

/// Encodes one batch. Display names are
/// `"{name_prefix} {set_number} {padded_index}"`.
pub fn encode_batch<S: AsRef<str>>(numbers: &[S], name_prefix: &str, set_number: u32) -> String {
    let width = index_width(numbers.len());
    let mut lines = Vec::with_capacity(numbers.len() * 6);
    for (offset, number) in numbers.iter().enumerate() {
        let index = offset + 1;
        let name = format!("{name_prefix} {set_number} {index:0width$}");
        push_record(&mut lines, &name, [number.as_ref()]);
    }
    lines.join("\n")
}

/// Partitions `numbers` and encodes each batch into a unit named
/// `"{file_prefix} {set_number}"`.
///
/// # Errors
/// Returns `BatchError` for zero batch size or start set number.
pub fn encode_vcard<S: AsRef<str>>(
    numbers: &[S],
    settings: &EncodeSettings,
) -> Result<OutputBundle, BatchError> {
    let batches = partition(numbers, settings.batch_size, settings.start_set_number)?;
    let mut bundle = OutputBundle::new();
    for batch in batches {
        let content = encode_batch(batch.items, &settings.name_prefix, batch.set_number);
        bundle.push(batch.unit_name(&settings.file_prefix), content);
    }
    Ok(bundle)
}
