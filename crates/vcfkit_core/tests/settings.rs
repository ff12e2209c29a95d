use vcfkit_core::{ExportFormat, Settings, ValidationMode};

#[test]
fn partial_json_fills_remaining_defaults() {
    let json = serde_json::json!({
        "normalize": { "validation": "lenient", "default_region": "GB" },
        "convert": { "batch_size": 100, "file_prefix": "navy_file" },
        "extract": { "format": "csv" }
    });

    let settings: Settings = serde_json::from_value(json).unwrap();
    assert_eq!(settings.normalize.validation, ValidationMode::Lenient);
    assert_eq!(settings.normalize.default_region.as_deref(), Some("GB"));
    assert_eq!(settings.convert.batch_size, 100);
    assert_eq!(settings.convert.file_prefix, "navy_file");
    assert_eq!(settings.convert.name_prefix, "General");
    assert_eq!(settings.convert.start_set_number, 1);
    assert_eq!(settings.extract.format, ExportFormat::Csv);
    assert_eq!(settings.split.prefix, "split");
    assert!(settings.merge.dedupe_numbers);
    assert!(settings.validate().is_ok());
}

#[test]
fn unknown_fields_are_rejected() {
    let json = serde_json::json!({ "convert": { "batch": 10 } });
    let err = serde_json::from_value::<Settings>(json).unwrap_err();
    assert!(err.to_string().contains("unknown field"), "unexpected error: {err}");
}

#[test]
fn zero_values_from_json_fail_validation() {
    let json = serde_json::json!({ "split": { "chunk_size": 0 } });
    let settings: Settings = serde_json::from_value(json).unwrap();
    let err = settings.validate().unwrap_err();
    assert_eq!(err.to_string(), "split.chunk_size must be at least 1");
}
