//! Typed settings shared by the CLI and service callers.
//!
//! # Responsibility
//! - Provide defaults for every knob (batch size 50, set start 1, split
//!   size 100).
//! - Validate settings before any processing starts.
//!
//! # Invariants
//! - Sizes and set numbers are at least 1 after `validate()`.
//! - A configured default region is known to the numbering metadata.
//! - File prefixes are single path components: no separators.

use crate::merge::engine::MergeOptions;
use crate::normalize::phone::{is_known_region, NormalizeOptions};
use crate::service::convert_service::ExtractSettings;
use crate::service::split_service::SplitSettings;
use crate::vcard::encode::EncodeSettings;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PATH_SEPARATORS: &[char] = &['/', '\\', '\0'];

/// All settings, deserializable from a partial JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub normalize: NormalizeOptions,
    pub convert: EncodeSettings,
    pub extract: ExtractSettings,
    pub split: SplitSettings,
    pub merge: MergeOptions,
}

impl Settings {
    /// Validates cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(region) = &self.normalize.default_region {
            if !is_known_region(region) {
                return Err(ConfigError::UnknownRegion(region.clone()));
            }
        }

        require_positive("convert.batch_size", self.convert.batch_size)?;
        require_positive(
            "convert.start_set_number",
            self.convert.start_set_number as usize,
        )?;
        require_prefix("convert.file_prefix", &self.convert.file_prefix)?;

        require_positive("split.chunk_size", self.split.chunk_size)?;
        require_positive("split.start_set_number", self.split.start_set_number as usize)?;
        require_prefix("split.prefix", &self.split.prefix)?;
        Ok(())
    }
}

/// Settings validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MustBePositive(&'static str),
    EmptyPrefix(&'static str),
    PathInPrefix(&'static str),
    UnknownRegion(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MustBePositive(field) => write!(f, "{field} must be at least 1"),
            Self::EmptyPrefix(field) => write!(f, "{field} must not be empty"),
            Self::PathInPrefix(field) => {
                write!(f, "{field} must not contain path separators")
            }
            Self::UnknownRegion(value) => write!(f, "unknown default region: `{value}`"),
        }
    }
}

impl Error for ConfigError {}

fn require_positive(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::MustBePositive(field));
    }
    Ok(())
}

fn require_prefix(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyPrefix(field));
    }
    if value.contains(PATH_SEPARATORS) {
        return Err(ConfigError::PathInPrefix(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Settings};

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.convert.batch_size, 50);
        assert_eq!(settings.convert.start_set_number, 1);
        assert_eq!(settings.split.chunk_size, 100);
        assert!(settings.merge.merge_by_name);
    }

    #[test]
    fn rejects_zero_batch_size() {
        let mut settings = Settings::default();
        settings.convert.batch_size = 0;
        assert_eq!(
            settings.validate().unwrap_err(),
            ConfigError::MustBePositive("convert.batch_size")
        );
    }

    #[test]
    fn rejects_unknown_region() {
        let mut settings = Settings::default();
        settings.normalize.default_region = Some("QQ".to_string());
        assert!(matches!(
            settings.validate().unwrap_err(),
            ConfigError::UnknownRegion(_)
        ));
    }

    #[test]
    fn rejects_blank_split_prefix() {
        let mut settings = Settings::default();
        settings.split.prefix = "  ".to_string();
        assert_eq!(
            settings.validate().unwrap_err(),
            ConfigError::EmptyPrefix("split.prefix")
        );
    }

    #[test]
    fn rejects_prefixes_that_escape_the_output_directory() {
        for prefix in ["../outside", "nested/name", "C:\\temp\\x"] {
            let mut settings = Settings::default();
            settings.convert.file_prefix = prefix.to_string();
            assert_eq!(
                settings.validate().unwrap_err(),
                ConfigError::PathInPrefix("convert.file_prefix"),
                "{prefix} should be rejected"
            );
        }

        let mut settings = Settings::default();
        settings.split.prefix = "a/b".to_string();
        assert_eq!(
            settings.validate().unwrap_err(),
            ConfigError::PathInPrefix("split.prefix")
        );
    }
}
