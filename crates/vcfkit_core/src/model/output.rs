//! Named output units produced by batching operations.
//!
//! # Invariants
//! - Units keep the order they were pushed in (ascending set number).
//! - Unit names carry no file extension; the caller appends `.vcf`/`.txt`.

use serde::Serialize;

/// One named output, e.g. `"contacts 3"` with its vCard text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputUnit {
    pub name: String,
    pub content: String,
}

/// Ordered mapping from output name to content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputBundle {
    units: Vec<OutputUnit>,
}

impl OutputBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.units.push(OutputUnit {
            name: name.into(),
            content: content.into(),
        });
    }

    /// Returns the content of the unit named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.units
            .iter()
            .find(|unit| unit.name == name)
            .map(|unit| unit.content.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|unit| unit.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl IntoIterator for OutputBundle {
    type Item = OutputUnit;
    type IntoIter = std::vec::IntoIter<OutputUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl<'a> IntoIterator for &'a OutputBundle {
    type Item = &'a OutputUnit;
    type IntoIter = std::slice::Iter<'a, OutputUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
