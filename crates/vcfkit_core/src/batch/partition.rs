//! Batch partitioner.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration errors raised before any partitioning happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    ZeroBatchSize,
    ZeroStartSetNumber,
    /// Set numbers would not fit in `u32`.
    SetNumberOverflow {
        start: u32,
        batches: usize,
    },
}

impl Display for BatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroBatchSize => write!(f, "batch size must be at least 1"),
            Self::ZeroStartSetNumber => write!(f, "start set number must be at least 1"),
            Self::SetNumberOverflow { start, batches } => write!(
                f,
                "{batches} batches starting at set {start} overflow the set number range"
            ),
        }
    }
}

impl Error for BatchError {}

/// One ordered slice of the input tagged with its set number.
#[derive(Debug, PartialEq, Eq)]
pub struct Batch<'a, T> {
    pub set_number: u32,
    pub items: &'a [T],
}

impl<T> Batch<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Output unit name for this batch, `"{prefix} {set_number}"`.
    pub fn unit_name(&self, prefix: &str) -> String {
        unit_name(prefix, self.set_number)
    }
}

/// Formats an output unit name. Extensions are appended by the caller.
pub fn unit_name(prefix: &str, set_number: u32) -> String {
    format!("{prefix} {set_number}")
}

/// Splits `items` into `ceil(len / batch_size)` batches numbered from
/// `start_set_number`.
///
/// # Errors
/// - `ZeroBatchSize` / `ZeroStartSetNumber` for zero parameters.
/// - `SetNumberOverflow` when the last set number exceeds `u32::MAX`.
pub fn partition<T>(
    items: &[T],
    batch_size: usize,
    start_set_number: u32,
) -> Result<Vec<Batch<'_, T>>, BatchError> {
    if batch_size == 0 {
        return Err(BatchError::ZeroBatchSize);
    }
    if start_set_number == 0 {
        return Err(BatchError::ZeroStartSetNumber);
    }

    let batch_count = items.len().div_ceil(batch_size);
    items
        .chunks(batch_size)
        .enumerate()
        .map(|(offset, chunk)| {
            let set_number = u32::try_from(offset)
                .ok()
                .and_then(|offset| start_set_number.checked_add(offset))
                .ok_or(BatchError::SetNumberOverflow {
                    start: start_set_number,
                    batches: batch_count,
                })?;
            Ok(Batch {
                set_number,
                items: chunk,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{partition, unit_name, BatchError};

    #[test]
    fn rejects_zero_parameters() {
        let items = [1, 2, 3];
        assert_eq!(
            partition(&items, 0, 1).unwrap_err(),
            BatchError::ZeroBatchSize
        );
        assert_eq!(
            partition(&items, 2, 0).unwrap_err(),
            BatchError::ZeroStartSetNumber
        );
    }

    #[test]
    fn rejects_set_number_overflow() {
        let items = [1, 2, 3];
        let err = partition(&items, 1, u32::MAX - 1).unwrap_err();
        assert_eq!(
            err,
            BatchError::SetNumberOverflow {
                start: u32::MAX - 1,
                batches: 3,
            }
        );
    }

    #[test]
    fn empty_input_has_no_batches() {
        let items: [u8; 0] = [];
        assert!(partition(&items, 10, 1).unwrap().is_empty());
    }

    #[test]
    fn unit_name_joins_prefix_and_set() {
        assert_eq!(unit_name("general_file", 7), "general_file 7");
    }
}
