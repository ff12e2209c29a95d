//! Decoded vCard contact.

use serde::Serialize;

/// Display name plus the telephone values found under it.
///
/// Numbers may be canonical or raw, depending on where the contact was
/// decoded from. Identity is the name only when merging by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub numbers: Vec<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, numbers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            numbers,
        }
    }
}
