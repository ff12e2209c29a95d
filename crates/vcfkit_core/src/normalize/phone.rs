//! Phone number normalizer backed by libphonenumber metadata.

use crate::model::number::CanonicalNumber;
use phonenumber::metadata::DATABASE;
use phonenumber::{country, Mode, PhoneNumber};
use serde::{Deserialize, Serialize};

const BYTE_ORDER_MARK: char = '\u{feff}';
const ABSENT_MARKERS: &[&str] = &["nan", "none"];

/// Acceptance level applied after a token parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Number must be assignable under its numbering plan.
    #[default]
    Strict,
    /// Number must be valid, or have a national length that some region
    /// sharing its calling code lists as possible. Accepts a superset of
    /// `Strict`.
    Lenient,
}

/// Normalizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeOptions {
    pub validation: ValidationMode,
    /// ISO 3166 alpha-2 region used when a token carries no usable
    /// country code, e.g. `"GB"`. Only consulted after the `+digits`
    /// attempt fails.
    pub default_region: Option<String>,
}

impl NormalizeOptions {
    pub fn lenient() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            default_region: None,
        }
    }

    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = Some(region.into());
        self
    }
}

/// Returns whether `code` names a region known to the metadata database.
pub fn is_known_region(code: &str) -> bool {
    parse_region(code).is_some()
}

/// Normalizes one raw token with strict validation and no default region.
pub fn normalize(raw: &str) -> Option<CanonicalNumber> {
    normalize_with(raw, &NormalizeOptions::default())
}

/// Normalizes one raw token.
///
/// Returns `None` for absent markers (`""`, `nan`, `none`), tokens without
/// digits, and anything that fails to parse or validate.
pub fn normalize_with(raw: &str, options: &NormalizeOptions) -> Option<CanonicalNumber> {
    let token = clean_token(raw)?;
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    if token.starts_with('+') {
        return parse_accepted(None, token, options.validation);
    }

    let international = format!("+{digits}");
    if let Some(number) = parse_accepted(None, &international, options.validation) {
        return Some(number);
    }

    let region = options.default_region.as_deref().and_then(parse_region)?;
    parse_accepted(Some(region), &digits, options.validation)
}

fn clean_token(raw: &str) -> Option<&str> {
    let token = raw.trim().trim_start_matches(BYTE_ORDER_MARK).trim();
    if token.is_empty()
        || ABSENT_MARKERS
            .iter()
            .any(|marker| token.eq_ignore_ascii_case(marker))
    {
        return None;
    }
    Some(token)
}

fn parse_region(code: &str) -> Option<country::Id> {
    code.trim().to_ascii_uppercase().parse::<country::Id>().ok()
}

fn parse_accepted(
    region: Option<country::Id>,
    text: &str,
    mode: ValidationMode,
) -> Option<CanonicalNumber> {
    let parsed = phonenumber::parse(region, text).ok()?;
    let digits = e164_digits(&parsed);
    let accepted = match mode {
        ValidationMode::Strict => phonenumber::is_valid(&parsed),
        ValidationMode::Lenient => phonenumber::is_valid(&parsed) || has_possible_length(&parsed),
    };
    if !accepted || digits.is_empty() {
        return None;
    }
    Some(CanonicalNumber::from_parts(
        format!("+{digits}"),
        parsed.code().value(),
    ))
}

fn has_possible_length(parsed: &PhoneNumber) -> bool {
    let Ok(length) = u16::try_from(parsed.national().to_string().len()) else {
        return false;
    };
    DATABASE
        .by_code(&parsed.code().value())
        .map_or(false, |regions| {
            regions
                .iter()
                .any(|meta| meta.descriptors().general().possible_length().contains(&length))
        })
}

fn e164_digits(parsed: &PhoneNumber) -> String {
    parsed
        .format()
        .mode(Mode::E164)
        .to_string()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{clean_token, has_possible_length, is_known_region, normalize};

    #[test]
    fn clean_token_strips_bom_and_absent_markers() {
        assert_eq!(clean_token("\u{feff} +1 201 "), Some("+1 201"));
        assert_eq!(clean_token("NaN"), None);
        assert_eq!(clean_token(" None "), None);
        assert_eq!(clean_token("   "), None);
    }

    #[test]
    fn rejects_tokens_without_digits() {
        assert!(normalize("call me").is_none());
        assert!(normalize("+").is_none());
    }

    #[test]
    fn region_codes_are_case_insensitive() {
        assert!(is_known_region("gb"));
        assert!(is_known_region("US"));
        assert!(!is_known_region("QQ"));
    }

    #[test]
    fn possible_length_follows_the_calling_code_regions() {
        let niue = phonenumber::parse(None, "+6834002").unwrap();
        let nanp = phonenumber::parse(None, "+11234567890").unwrap();
        let freephone = phonenumber::parse(None, "+8001234567").unwrap();
        assert!(has_possible_length(&niue));
        assert!(has_possible_length(&nanp));
        assert!(!has_possible_length(&freephone));
    }
}
