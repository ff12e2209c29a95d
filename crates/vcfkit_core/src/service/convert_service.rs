//! Number-oriented use-cases: convert to vCard, extract from vCard, analyze.
//!
//! # Invariants
//! - "No valid numbers" is an outcome, not an error.
//! - Source and configuration errors abort before any output is produced.

use crate::batch::partition::BatchError;
use crate::collect::analysis::{analyze, NumberAnalysis};
use crate::collect::collector::{collect, CollectReport};
use crate::export::{ExportFormat, ExportResult};
use crate::model::output::OutputBundle;
use crate::normalize::phone::{normalize_with, NormalizeOptions};
use crate::source::ingest::{SourceError, SourceSet};
use crate::vcard::decode::extract_numbers;
use crate::vcard::encode::{encode_vcard, EncodeSettings};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for convert/analyze use-cases.
#[derive(Debug)]
pub enum ServiceError {
    Source(SourceError),
    Batch(BatchError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Batch(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Batch(err) => Some(err),
        }
    }
}

impl From<SourceError> for ServiceError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<BatchError> for ServiceError {
    fn from(value: BatchError) -> Self {
        Self::Batch(value)
    }
}

/// Result of a convert-to-vCard request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    Converted {
        bundle: OutputBundle,
        report: CollectReport,
    },
    /// Every token was skipped or there were no tokens at all.
    NoValidNumbers { report: CollectReport },
}

impl ConvertOutcome {
    pub fn report(&self) -> CollectReport {
        match self {
            Self::Converted { report, .. } | Self::NoValidNumbers { report } => *report,
        }
    }
}

/// Collects numbers from `sources` and encodes them into vCard batches.
///
/// # Errors
/// - `ServiceError::Batch` when the batch settings are invalid; checked
///   before any source is read.
/// - `ServiceError::Source` when a CSV source cannot be read.
pub fn convert_to_vcards(
    sources: &SourceSet,
    normalize: &NormalizeOptions,
    encode: &EncodeSettings,
) -> ServiceResult<ConvertOutcome> {
    if encode.batch_size == 0 {
        return Err(BatchError::ZeroBatchSize.into());
    }
    if encode.start_set_number == 0 {
        return Err(BatchError::ZeroStartSetNumber.into());
    }

    let tokens = sources.tokens().inspect_err(|err| {
        warn!("event=convert_to_vcf module=service status=error reason=source error={err}");
    })?;
    let collection = collect(&tokens, normalize);
    let report = collection.report();

    if collection.is_empty() {
        info!(
            "event=convert_to_vcf module=service status=empty files={} total={} skipped={}",
            sources.file_count(),
            report.total,
            report.skipped
        );
        return Ok(ConvertOutcome::NoValidNumbers { report });
    }

    let bundle = encode_vcard(&collection.numbers, encode)?;
    info!(
        "event=convert_to_vcf module=service status=ok files={} manual={} total={} valid={} skipped={} duplicates={} units={}",
        sources.file_count(),
        sources.has_manual(),
        report.total,
        report.valid,
        report.skipped,
        report.duplicates,
        bundle.len()
    );
    Ok(ConvertOutcome::Converted { bundle, report })
}

/// Post-processing applied to numbers pulled out of vCard text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractSettings {
    /// Pass values through the normalizer and drop the ones it rejects.
    pub canonicalize: bool,
    /// Keep digits only (drops `+` and separators).
    pub digits_only: bool,
    /// Drop repeated values, keeping the first.
    pub dedupe: bool,
    pub format: ExportFormat,
}

/// Numbers extracted from one or more vCard texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractOutcome {
    pub numbers: Vec<String>,
    /// `TEL` values seen before filtering.
    pub found: usize,
    /// Values rejected by the normalizer or left empty.
    pub dropped: usize,
    pub duplicates: usize,
}

impl ExtractOutcome {
    pub fn render(&self, format: ExportFormat) -> ExportResult<String> {
        format.render(&self.numbers)
    }
}

/// Extracts `TEL` values from every text in order and post-processes them.
pub fn extract_to_numbers<S: AsRef<str>>(
    texts: &[S],
    settings: &ExtractSettings,
    normalize: &NormalizeOptions,
) -> ExtractOutcome {
    let mut outcome = ExtractOutcome::default();
    let mut seen = HashSet::new();

    for raw in texts.iter().flat_map(|text| extract_numbers(text.as_ref())) {
        outcome.found += 1;
        let value = if settings.canonicalize {
            match normalize_with(&raw, normalize) {
                Some(number) => number.into_string(),
                None => {
                    outcome.dropped += 1;
                    continue;
                }
            }
        } else {
            raw
        };
        let value = if settings.digits_only {
            value.chars().filter(char::is_ascii_digit).collect()
        } else {
            value
        };
        if value.is_empty() {
            outcome.dropped += 1;
            continue;
        }
        if settings.dedupe && !seen.insert(value.clone()) {
            outcome.duplicates += 1;
            continue;
        }
        outcome.numbers.push(value);
    }

    info!(
        "event=extract_numbers module=service status=ok files={} found={} kept={} dropped={} duplicates={}",
        texts.len(),
        outcome.found,
        outcome.numbers.len(),
        outcome.dropped,
        outcome.duplicates
    );
    outcome
}

/// Reports what a conversion of `sources` would collect.
pub fn analyze_sources(
    sources: &SourceSet,
    normalize: &NormalizeOptions,
) -> ServiceResult<NumberAnalysis> {
    let tokens = sources.tokens()?;
    let analysis = analyze(&tokens, normalize);
    info!(
        "event=analyze module=service status=ok total={} valid={} skipped={} duplicates={} country_codes={}",
        analysis.report.total,
        analysis.report.valid,
        analysis.report.skipped,
        analysis.report.duplicates,
        analysis.by_country_code.len()
    );
    Ok(analysis)
}
