//! Canonical phone number value.
//!
//! # Invariants
//! - `value` is `+` followed by digits only, never empty.
//! - `country_code` is the calling code parsed together with `value`.

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Phone number rendered in fully-qualified international form.
///
/// There is no public constructor: values come out of
/// [`crate::normalize::phone::normalize_with`] only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalNumber {
    value: String,
    country_code: u16,
}

impl CanonicalNumber {
    pub(crate) fn from_parts(value: String, country_code: u16) -> Self {
        Self {
            value,
            country_code,
        }
    }

    /// Returns the `+<countrycode><national>` text.
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Country calling code, e.g. `1` for NANP or `44` for the UK.
    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    /// Returns the number without the leading `+`.
    pub fn digits(&self) -> &str {
        self.value.trim_start_matches('+')
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Display for CanonicalNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for CanonicalNumber {
    fn as_ref(&self) -> &str {
        self.value.as_str()
    }
}

impl PartialEq<str> for CanonicalNumber {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for CanonicalNumber {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl Serialize for CanonicalNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
