//! Core domain logic for vcfkit.
//! This crate is the single source of truth for number canonicalization,
//! vCard batching and merge invariants.

pub mod batch;
pub mod collect;
pub mod config;
pub mod export;
pub mod logging;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod service;
pub mod source;
pub mod vcard;

pub use batch::partition::{partition, unit_name, Batch, BatchError};
pub use collect::analysis::{analyze, NumberAnalysis};
pub use collect::collector::{collect, CollectReport, Collection, NumberCollector};
pub use config::{ConfigError, Settings};
pub use export::{render_csv, render_txt, ExportError, ExportFormat, ExportResult};
pub use logging::{default_log_level, init_logging, LogTarget};
pub use merge::engine::{merge_contacts, merge_vcards, render_contacts, MergeOptions};
pub use model::contact::Contact;
pub use model::number::CanonicalNumber;
pub use model::output::{OutputBundle, OutputUnit};
pub use normalize::phone::{
    is_known_region, normalize, normalize_with, NormalizeOptions, ValidationMode,
};
pub use service::convert_service::{
    analyze_sources, convert_to_vcards, extract_to_numbers, ConvertOutcome, ExtractOutcome,
    ExtractSettings, ServiceError, ServiceResult,
};
pub use service::split_service::{split_lines, split_vcard, SplitSettings};
pub use source::ingest::{ColumnSelector, Source, SourceError, SourceResult, SourceSet};
pub use vcard::decode::{
    extract_contacts, extract_contacts_with, extract_numbers, DecodeMode, VCardError,
};
pub use vcard::encode::{encode_batch, encode_vcard, index_width, EncodeSettings};
pub use vcard::records::split_records;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
